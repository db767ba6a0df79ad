//! Typed, capability-checked client layer for a ratbagd-style input-device
//! configuration daemon.
//!
//! The daemon owns all device state. This crate presents that state as
//! strongly-typed local values, validates writes against daemon-advertised
//! capabilities *before* any wire traffic, and (de)serializes the daemon's
//! heterogeneous wire values:
//!
//! - **Model** ([`model`]) -- the tagged-variant value types: [`Resolution`]
//!   (a single DPI scalar, a per-axis pair, or null, fixed per device at
//!   construction) and the button [`MappingAction`] (button index, special
//!   function, macro sequence, or an unknown sentinel), plus the LED types.
//!
//! - **Wire codec** ([`convert`]) -- lossless conversion between the broker's
//!   generic [`Value`](remus_broker::Value) and the model types.
//!
//! - **Capability sets** ([`caps`]) -- per-device whitelists fetched once at
//!   interface construction and immutable thereafter.
//!
//! - **Property façades** ([`interface`]) -- [`ResolutionInterface`],
//!   [`ButtonInterface`], and [`LedInterface`] compose codec and validator
//!   around the [`PropertyBroker`](remus_broker::PropertyBroker) calls.
//!
//! Everything is synchronous: constructors block on the initial capability
//! fetch, reads and writes are blocking round-trips, and no retry or I/O
//! multiplexing happens here -- that belongs to the broker implementation.

pub mod caps;
pub mod config;
pub mod convert;
pub mod error;
pub mod interface;
pub mod model;
pub mod proxy;

pub use caps::{SupportedActions, SupportedResolutions};
pub use config::{ConfigError, ServiceConfig};
pub use error::Error;
pub use interface::button::{ButtonInterface, Mapping};
pub use interface::led::LedInterface;
pub use interface::resolution::ResolutionInterface;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    ActionType, Axes, Color, ColorDepth, KeyEvent, LedMode, Macro, MappingAction, Resolution,
    ResolutionKind, SpecialButton,
};
