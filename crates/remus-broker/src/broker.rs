// ── Property broker trait ──

use thiserror::Error;

use crate::value::Value;

/// Opaque failure reported by the property broker.
///
/// Mirrors the (name, message) pair a bus error carries. The client layer
/// never inspects the name to branch on it -- every broker failure is
/// surfaced to the caller unchanged in cause and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}: {message}")]
pub struct BrokerError {
    /// Machine-readable error name (e.g. a bus error name).
    pub name: String,
    /// Human-readable description.
    pub message: String,
}

impl BrokerError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// The property surface of one daemon object, seen through one interface.
///
/// An implementation is scoped the way a bus proxy is: one service, one
/// object path, one interface -- so property names are bare (`"Resolution"`,
/// not `org.example.Resolution.Resolution`). Calls are synchronous, blocking
/// round-trips; retry policy, if any, belongs to the implementation, not to
/// the client layer consuming it.
pub trait PropertyBroker: Send + Sync {
    /// Read a named property.
    fn get(&self, name: &str) -> Result<Value, BrokerError>;

    /// Write a named property.
    fn set(&self, name: &str, value: Value) -> Result<(), BrokerError>;

    /// Invoke a named, argument-less method (a stateless daemon action).
    fn call(&self, method: &str) -> Result<(), BrokerError>;
}
