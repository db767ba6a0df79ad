// ── Button façade and mapping handle ──

use std::fmt;
use std::sync::{Arc, Weak};

use tracing::{debug, info};

use remus_broker::PropertyBroker;

use crate::caps::SupportedActions;
use crate::convert::{decode_action_codes, decode_mapping, encode_mapping};
use crate::error::Error;
use crate::model::{ActionType, Macro, MappingAction, SpecialButton};
use crate::proxy::PropertyProxy;

const INTERFACE: &str = "Button";

struct ButtonShared {
    proxy: PropertyProxy,
    index: u32,
    supported: SupportedActions,
}

/// One remappable button of a device.
pub struct ButtonInterface {
    shared: Arc<ButtonShared>,
}

impl ButtonInterface {
    /// Construct the façade, blocking on the initial capability fetch.
    pub fn new(broker: Arc<dyn PropertyBroker>) -> Result<Self, Error> {
        let proxy = PropertyProxy::new(broker, INTERFACE);
        let index = proxy.get_u32("Index")?;

        let codes = decode_action_codes(&proxy.get("ActionTypes")?)?;
        let supported = SupportedActions::from_codes(codes);

        info!(index, "the button supports: {}", supported);

        Ok(Self {
            shared: Arc::new(ButtonShared {
                proxy,
                index,
                supported,
            }),
        })
    }

    /// Daemon-assigned button index.
    pub fn index(&self) -> u32 {
        self.shared.index
    }

    /// The capability set fetched at construction.
    pub fn supported_actions(&self) -> &SupportedActions {
        &self.shared.supported
    }

    /// Read and decode the current mapping.
    ///
    /// The returned handle keeps a non-owning back-reference to this
    /// interface so its mutators can re-check the allowed action types; it
    /// never extends the interface's lifetime.
    pub fn mapping(&self) -> Result<Mapping, Error> {
        let action = decode_mapping(&self.shared.proxy.get("Mapping")?)?;
        debug!("linking {} to the mapping instance", self);

        Ok(Mapping {
            action,
            owner: Arc::downgrade(&self.shared),
        })
    }

    /// Validate and write a mapping. No wire traffic on rejection.
    pub fn set_mapping(&self, mapping: &Mapping) -> Result<(), Error> {
        info!("setting {} to {}", self, mapping.action_type());
        self.shared.supported.check(mapping.action_type())?;
        self.shared.proxy.set("Mapping", encode_mapping(&mapping.action))
    }

    /// Disable this button.
    pub fn disable(&self) -> Result<(), Error> {
        self.shared.proxy.call("Disable")?;
        debug!("{} disabled", self);
        Ok(())
    }
}

impl fmt::Display for ButtonInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} no. {}", self.shared.proxy.interface(), self.shared.index)
    }
}

/// A button's action, tied back to the button that produced it.
///
/// Accessors check the active variant and have no side effects; mutators
/// first validate the action-type transition against the owning button's
/// capability set, then replace tag and payload in one assignment -- the
/// handle is never observable with a mismatched pair, error path included.
pub struct Mapping {
    action: MappingAction,
    owner: Weak<ButtonShared>,
}

impl Mapping {
    /// The payload-carrying action.
    pub fn action(&self) -> &MappingAction {
        &self.action
    }

    /// The active variant's tag.
    pub fn action_type(&self) -> ActionType {
        self.action.action_type()
    }

    /// Target button index of a `Button` mapping.
    pub fn button(&self) -> Result<u32, Error> {
        match &self.action {
            MappingAction::Button(button) => Ok(*button),
            other => Err(Error::WrongActionVariant {
                actual: other.action_type(),
                expected: ActionType::Button,
            }),
        }
    }

    /// Special function of a `Special` mapping.
    pub fn special(&self) -> Result<SpecialButton, Error> {
        match &self.action {
            MappingAction::Special(special) => Ok(*special),
            other => Err(Error::WrongActionVariant {
                actual: other.action_type(),
                expected: ActionType::Special,
            }),
        }
    }

    /// Key-event sequence of a `Macro` mapping.
    pub fn macros(&self) -> Result<&[Macro], Error> {
        match &self.action {
            MappingAction::Macro(steps) => Ok(steps),
            other => Err(Error::WrongActionVariant {
                actual: other.action_type(),
                expected: ActionType::Macro,
            }),
        }
    }

    /// Remap to another physical button.
    pub fn set_button(&mut self, button: u32) -> Result<(), Error> {
        self.check_transition(ActionType::Button)?;
        self.action = MappingAction::Button(button);
        Ok(())
    }

    /// Map to a special function.
    pub fn set_special(&mut self, special: SpecialButton) -> Result<(), Error> {
        self.check_transition(ActionType::Special)?;
        self.action = MappingAction::Special(special);
        Ok(())
    }

    /// Map to a macro sequence.
    pub fn set_macros(&mut self, steps: Vec<Macro>) -> Result<(), Error> {
        self.check_transition(ActionType::Macro)?;
        self.action = MappingAction::Macro(steps);
        Ok(())
    }

    /// Re-check the allowed action types through the back-reference; runs
    /// before any payload is attached.
    fn check_transition(&self, requested: ActionType) -> Result<(), Error> {
        let owner = self.owner.upgrade().ok_or(Error::DetachedMapping)?;
        debug!(button = owner.index, "setting action type to {}", requested);
        owner.supported.check(requested)
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping").field("action", &self.action).finish()
    }
}
