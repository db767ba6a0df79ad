// ── Property proxy ──
//
// Thin wrapper over a broker handle: adds the interface name for context,
// one log line per round-trip, and maps broker failures into the crate
// error taxonomy. All façades funnel their wire traffic through here.

use std::sync::Arc;

use tracing::debug;

use remus_broker::{PropertyBroker, Value};

use crate::convert::{expect_bool, expect_u32};
use crate::error::Error;

#[derive(Clone)]
pub struct PropertyProxy {
    broker: Arc<dyn PropertyBroker>,
    interface: &'static str,
}

impl PropertyProxy {
    pub fn new(broker: Arc<dyn PropertyBroker>, interface: &'static str) -> Self {
        Self { broker, interface }
    }

    pub fn interface(&self) -> &'static str {
        self.interface
    }

    /// Read a property, wrapping broker failure as a transport error.
    pub fn get(&self, property: &'static str) -> Result<Value, Error> {
        debug!(interface = self.interface, property, "reading property");
        self.broker.get(property).map_err(|source| Error::Transport {
            property: property.to_owned(),
            source,
        })
    }

    /// Write a property, wrapping broker failure as a transport error.
    pub fn set(&self, property: &'static str, value: Value) -> Result<(), Error> {
        debug!(interface = self.interface, property, %value, "writing property");
        self.broker
            .set(property, value)
            .map_err(|source| Error::Transport {
                property: property.to_owned(),
                source,
            })
    }

    /// Invoke a stateless daemon action.
    pub fn call(&self, method: &'static str) -> Result<(), Error> {
        debug!(interface = self.interface, method, "calling method");
        self.broker.call(method).map_err(|source| Error::Transport {
            property: method.to_owned(),
            source,
        })
    }

    pub fn get_u32(&self, property: &'static str) -> Result<u32, Error> {
        expect_u32(&self.get(property)?, property)
    }

    pub fn get_bool(&self, property: &'static str) -> Result<bool, Error> {
        expect_bool(&self.get(property)?, property)
    }
}
