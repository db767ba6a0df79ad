// ── In-memory broker ──
//
// Map-backed `PropertyBroker` used by the test suites and for offline
// development. Reads and writes go through a mutex so a broker handle can
// be shared the same way a real bus proxy would be; every successful write
// and call is journaled for later inspection.

use std::collections::BTreeMap;
use std::sync::Mutex;

use tracing::debug;

use crate::broker::{BrokerError, PropertyBroker};
use crate::value::Value;

const ERR_UNKNOWN_PROPERTY: &str = "remus.broker.UnknownProperty";
const ERR_UNKNOWN_METHOD: &str = "remus.broker.UnknownMethod";
const ERR_INJECTED: &str = "remus.broker.Injected";

#[derive(Default)]
struct Inner {
    properties: BTreeMap<String, Value>,
    methods: Vec<String>,
    writes: Vec<(String, Value)>,
    calls: Vec<String>,
    fail_next: Option<BrokerError>,
}

/// An in-process property broker backed by a property map.
///
/// Seed it with the properties and methods one daemon object exposes, hand
/// it to a façade, then inspect [`writes`](Self::writes) and
/// [`calls`](Self::calls) to observe the wire traffic the façade produced.
#[derive(Default)]
pub struct MemoryBroker {
    inner: Mutex<Inner>,
}

impl MemoryBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a property (builder form).
    #[must_use]
    pub fn with_property(self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Declare an invocable method (builder form).
    #[must_use]
    pub fn with_method(self, name: impl Into<String>) -> Self {
        self.lock().methods.push(name.into());
        self
    }

    /// Seed or overwrite a property without journaling a write.
    pub fn insert(&self, name: impl Into<String>, value: Value) {
        self.lock().properties.insert(name.into(), value);
    }

    /// Current value of a property, if present.
    pub fn property(&self, name: &str) -> Option<Value> {
        self.lock().properties.get(name).cloned()
    }

    /// Journal of successful writes, in order.
    pub fn writes(&self) -> Vec<(String, Value)> {
        self.lock().writes.clone()
    }

    /// Journal of successful method calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    /// Make the next broker operation fail with the given error.
    pub fn fail_next(&self, error: BrokerError) {
        self.lock().fail_next = Some(error);
    }

    /// Convenience: make the next operation fail with an injected error.
    pub fn fail_next_with(&self, message: &str) {
        self.fail_next(BrokerError::new(ERR_INJECTED, message));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("memory broker lock poisoned")
    }

    fn take_injected(inner: &mut Inner) -> Result<(), BrokerError> {
        match inner.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl PropertyBroker for MemoryBroker {
    fn get(&self, name: &str) -> Result<Value, BrokerError> {
        let mut inner = self.lock();
        Self::take_injected(&mut inner)?;

        inner.properties.get(name).cloned().ok_or_else(|| {
            BrokerError::new(ERR_UNKNOWN_PROPERTY, format!("no such property: {name}"))
        })
    }

    fn set(&self, name: &str, value: Value) -> Result<(), BrokerError> {
        let mut inner = self.lock();
        Self::take_injected(&mut inner)?;

        if !inner.properties.contains_key(name) {
            return Err(BrokerError::new(
                ERR_UNKNOWN_PROPERTY,
                format!("no such property: {name}"),
            ));
        }

        debug!(property = name, %value, "memory broker write");
        inner.properties.insert(name.to_owned(), value.clone());
        inner.writes.push((name.to_owned(), value));
        Ok(())
    }

    fn call(&self, method: &str) -> Result<(), BrokerError> {
        let mut inner = self.lock();
        Self::take_injected(&mut inner)?;

        if !inner.methods.iter().any(|m| m == method) {
            return Err(BrokerError::new(
                ERR_UNKNOWN_METHOD,
                format!("no such method: {method}"),
            ));
        }

        debug!(method, "memory broker call");
        inner.calls.push(method.to_owned());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn get_returns_seeded_property() {
        let broker = MemoryBroker::new().with_property("Brightness", json!(100));
        assert_eq!(broker.get("Brightness").unwrap(), json!(100));
    }

    #[test]
    fn get_unknown_property_fails() {
        let broker = MemoryBroker::new();
        let err = broker.get("Brightness").unwrap_err();
        assert_eq!(err.name, ERR_UNKNOWN_PROPERTY);
    }

    #[test]
    fn set_updates_and_journals() {
        let broker = MemoryBroker::new().with_property("Brightness", json!(100));
        broker.set("Brightness", json!(200)).unwrap();

        assert_eq!(broker.property("Brightness"), Some(json!(200)));
        assert_eq!(broker.writes(), vec![("Brightness".to_owned(), json!(200))]);
    }

    #[test]
    fn set_unknown_property_fails_without_journaling() {
        let broker = MemoryBroker::new();
        assert!(broker.set("Brightness", json!(200)).is_err());
        assert!(broker.writes().is_empty());
    }

    #[test]
    fn call_requires_declared_method() {
        let broker = MemoryBroker::new().with_method("SetActive");
        broker.call("SetActive").unwrap();
        assert!(broker.call("SetDefault").is_err());
        assert_eq!(broker.calls(), vec!["SetActive".to_owned()]);
    }

    #[test]
    fn injected_failure_fires_once() {
        let broker = MemoryBroker::new().with_property("Mode", json!(1));
        broker.fail_next_with("daemon unreachable");

        assert!(broker.get("Mode").is_err());
        assert_eq!(broker.get("Mode").unwrap(), json!(1));
    }
}
