// ── Sensor resolution ──
//
// A device reports its resolution either as one DPI scalar shared by all
// axes or as independent per-axis scalars; which of the two a device speaks
// is fixed for its lifetime. The closed enum makes a diverging
// discriminant/payload pair unrepresentable, so accessors only ever check
// the tag, never repair it.

use std::fmt;

use crate::error::Error;

/// Which shape of resolution a device speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    /// No settable resolution, or value unknown.
    Null,
    /// One DPI scalar shared by all axes.
    Axis,
    /// Independent per-axis DPI scalars.
    Axes,
}

impl fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self {
            Self::Null => "(null)",
            Self::Axis => "(xy)",
            Self::Axes => "(x, y)",
        };
        f.write_str(shape)
    }
}

/// Independent per-axis DPI values.
///
/// Owned entirely by [`Resolution::Axes`]; the wire carries each axis as an
/// unsigned 32-bit field even though the logical range is 16 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axes {
    pub x: u16,
    pub y: u16,
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A sensor resolution: exactly one of the three shapes at a time.
///
/// Cross-variant comparisons are never equal; two `Null` values always are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Resolution {
    #[default]
    Null,
    Axis(u16),
    Axes(Axes),
}

impl Resolution {
    pub const fn kind(&self) -> ResolutionKind {
        match self {
            Self::Null => ResolutionKind::Null,
            Self::Axis(_) => ResolutionKind::Axis,
            Self::Axes(_) => ResolutionKind::Axes,
        }
    }

    /// The shared scalar of an `Axis` resolution.
    pub fn axis(&self) -> Result<u16, Error> {
        match self {
            Self::Axis(dpi) => Ok(*dpi),
            other => Err(Error::WrongResolutionVariant {
                actual: other.kind(),
                expected: ResolutionKind::Axis,
            }),
        }
    }

    /// The per-axis pair of an `Axes` resolution.
    pub fn axes(&self) -> Result<Axes, Error> {
        match self {
            Self::Axes(axes) => Ok(*axes),
            other => Err(Error::WrongResolutionVariant {
                actual: other.kind(),
                expected: ResolutionKind::Axes,
            }),
        }
    }
}

impl From<u16> for Resolution {
    fn from(dpi: u16) -> Self {
        Self::Axis(dpi)
    }
}

impl From<Axes> for Resolution {
    fn from(axes: Axes) -> Self {
        Self::Axes(axes)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "(null)"),
            Self::Axis(dpi) => write!(f, "({dpi})"),
            Self::Axes(axes) => write!(f, "{axes}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn same_variant_equality_compares_payloads() {
        assert_eq!(Resolution::Null, Resolution::Null);
        assert_eq!(Resolution::Axis(800), Resolution::Axis(800));
        assert_ne!(Resolution::Axis(800), Resolution::Axis(400));
        assert_eq!(
            Resolution::Axes(Axes { x: 400, y: 800 }),
            Resolution::Axes(Axes { x: 400, y: 800 }),
        );
    }

    #[test]
    fn cross_variant_comparisons_are_never_equal() {
        // An axis value sharing one coordinate with a pair is still unequal.
        assert_ne!(Resolution::Axis(800), Resolution::Axes(Axes { x: 800, y: 800 }));
        assert_ne!(Resolution::Null, Resolution::Axis(0));
    }

    #[test]
    fn axis_accessor_checks_the_tag() {
        assert_eq!(Resolution::Axis(800).axis().unwrap(), 800);

        let err = Resolution::Axes(Axes { x: 400, y: 800 }).axis().unwrap_err();
        assert!(matches!(
            err,
            Error::WrongResolutionVariant {
                actual: ResolutionKind::Axes,
                expected: ResolutionKind::Axis,
            }
        ));
    }

    #[test]
    fn axes_accessor_checks_the_tag() {
        let axes = Axes { x: 400, y: 800 };
        assert_eq!(Resolution::Axes(axes).axes().unwrap(), axes);
        assert!(Resolution::Null.axes().is_err());
    }

    #[test]
    fn display_matches_the_shape_notation() {
        assert_eq!(Resolution::Axis(800).to_string(), "(800)");
        assert_eq!(Resolution::Axes(Axes { x: 400, y: 800 }).to_string(), "(400, 800)");
        assert_eq!(Resolution::Null.to_string(), "(null)");
        assert_eq!(ResolutionKind::Axis.to_string(), "(xy)");
    }
}
