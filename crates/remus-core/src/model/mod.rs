// ── Device value model ──

pub mod led;
pub mod mapping;
pub mod resolution;

pub use led::{Color, ColorDepth, LedMode};
pub use mapping::{ActionType, KeyEvent, Macro, MappingAction, SpecialButton};
pub use resolution::{Axes, Resolution, ResolutionKind};
