// ── Capability sets ──
//
// Each interface fetches its capability set once, in its constructor, and
// never again: the sets are read-only truth for validation for the life of
// the interface. Re-fetching means constructing a new interface.

use std::collections::BTreeSet;
use std::fmt;

use tracing::warn;

use crate::error::Error;
use crate::model::{ActionType, Resolution, ResolutionKind};

/// The resolutions one sensor advertises: a flat set of legal per-axis DPI
/// scalars plus the fixed shape the device speaks.
///
/// Per-axis values are checked independently against the same flat set;
/// the daemon does not advertise paired combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedResolutions {
    kind: ResolutionKind,
    scalars: BTreeSet<u16>,
}

impl SupportedResolutions {
    pub(crate) fn new(kind: ResolutionKind, scalars: impl IntoIterator<Item = u16>) -> Self {
        Self {
            kind,
            scalars: scalars.into_iter().collect(),
        }
    }

    /// The shape fixed at interface construction.
    pub const fn kind(&self) -> ResolutionKind {
        self.kind
    }

    pub fn contains(&self, dpi: u16) -> bool {
        self.scalars.contains(&dpi)
    }

    /// Legal scalars, ascending.
    pub fn scalars(&self) -> impl Iterator<Item = u16> + '_ {
        self.scalars.iter().copied()
    }

    /// Validate a candidate write against the fixed shape and the scalar set.
    ///
    /// `Null` is never written, so a `Null` candidate fails the shape check
    /// on every device.
    pub fn check(&self, candidate: &Resolution) -> Result<(), Error> {
        if candidate.kind() == ResolutionKind::Null || candidate.kind() != self.kind {
            return Err(Error::IncompatibleResolution {
                resolution: *candidate,
                expected: self.kind,
            });
        }

        let supported = match candidate {
            Resolution::Axis(dpi) => self.contains(*dpi),
            Resolution::Axes(axes) => self.contains(axes.x) && self.contains(axes.y),
            Resolution::Null => false,
        };

        if supported {
            Ok(())
        } else {
            Err(Error::UnsupportedResolution {
                resolution: *candidate,
            })
        }
    }
}

impl fmt::Display for SupportedResolutions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind)?;
        f.debug_set().entries(&self.scalars).finish()
    }
}

/// The action types one button advertises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedActions(BTreeSet<ActionType>);

impl SupportedActions {
    /// Build from raw wire codes; a code this client does not recognize is
    /// kept as the `Unknown` sentinel.
    pub(crate) fn from_codes(codes: impl IntoIterator<Item = u32>) -> Self {
        let actions = codes
            .into_iter()
            .map(|code| {
                ActionType::from_repr(code).unwrap_or_else(|| {
                    warn!(code, "button advertises an action type this client does not know");
                    ActionType::Unknown
                })
            })
            .collect();
        Self(actions)
    }

    pub fn contains(&self, action: ActionType) -> bool {
        self.0.contains(&action)
    }

    pub fn iter(&self) -> impl Iterator<Item = ActionType> + '_ {
        self.0.iter().copied()
    }

    /// Validate an action-type transition before any payload is attached.
    /// Runs against the set fetched at construction; the daemon is never
    /// re-queried here.
    pub fn check(&self, requested: ActionType) -> Result<(), Error> {
        if self.contains(requested) {
            Ok(())
        } else {
            Err(Error::UnsupportedActionType {
                requested,
                supported: self.clone(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a SupportedActions {
    type Item = ActionType;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, ActionType>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl fmt::Display for SupportedActions {
    /// Renders as `` `Button`, `Special` and `Macro` `` for error messages
    /// and capability logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.len();
        for (position, action) in self.0.iter().enumerate() {
            write!(f, "`{action}`")?;
            match count - position {
                1 => {}
                2 => write!(f, " and ")?,
                _ => write!(f, ", ")?,
            }
        }
        Ok(())
    }
}

/// Bounded-scalar range check shared by the plain integer properties.
pub(crate) fn ensure_in_range(property: &'static str, max: u32, value: u32) -> Result<(), Error> {
    if value > max {
        Err(Error::OutOfRange {
            property,
            value,
            max,
        })
    } else {
        Ok(())
    }
}
