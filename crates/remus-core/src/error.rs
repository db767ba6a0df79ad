// ── Error taxonomy ──
//
// Every failure is synchronous and raised at the point of detection.
// Validation errors fire before any wire traffic; broker failures are
// surfaced unchanged in cause and never retried here.

use thiserror::Error;

use remus_broker::BrokerError;

use crate::caps::SupportedActions;
use crate::model::{ActionType, Resolution, ResolutionKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The broker reported failure for a property or method.
    #[error("unable to get or set the property {property}: {source}")]
    Transport {
        property: String,
        #[source]
        source: BrokerError,
    },

    /// A resolution payload accessor was invoked against the wrong variant.
    #[error("the resolution is of type {actual} but should be of type {expected}")]
    WrongResolutionVariant {
        actual: ResolutionKind,
        expected: ResolutionKind,
    },

    /// A mapping payload accessor was invoked against the wrong variant.
    #[error("the action type is `{actual}` but should be `{expected}`")]
    WrongActionVariant {
        actual: ActionType,
        expected: ActionType,
    },

    /// A resolution write whose shape differs from the device's fixed shape.
    #[error(
        "the resolution {resolution} is not compatible with the current device: \
         the resolution is of type {} but should be of type {expected}",
        .resolution.kind()
    )]
    IncompatibleResolution {
        resolution: Resolution,
        expected: ResolutionKind,
    },

    /// A resolution whose scalar(s) the device does not advertise.
    #[error("the resolution {resolution} is not compatible with the current device")]
    UnsupportedResolution { resolution: Resolution },

    /// An action type the button does not advertise.
    #[error(
        "the action type is `{requested}`, which is not compatible with the \
         current device: only {supported} are allowed"
    )]
    UnsupportedActionType {
        requested: ActionType,
        supported: SupportedActions,
    },

    /// A bounded scalar outside its legal range.
    #[error("{property}: {value} not in the range [0;{max}]")]
    OutOfRange {
        property: &'static str,
        value: u32,
        max: u32,
    },

    /// The decoded wire shape matched no known layout -- a client/daemon
    /// version mismatch, not a recoverable runtime condition.
    #[error("protocol violation: {message}")]
    Protocol { message: String },

    /// A mapping mutator ran after the button interface that produced the
    /// mapping was dropped.
    #[error("the mapping outlived the button interface that produced it")]
    DetachedMapping,
}

impl Error {
    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}
