// ── LED model ──

use std::fmt;

use strum::{Display, FromRepr};

/// Lighting mode of one LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, FromRepr)]
#[repr(u32)]
pub enum LedMode {
    Off = 0,
    Constant = 1,
    Cycles = 2,
    Breathing = 3,
}

impl LedMode {
    #[allow(clippy::as_conversions)]
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Off => "LED is off.",
            Self::Constant => "LED is on with constant brightness.",
            Self::Cycles => "LED cycles through a set of colors. This mode ignores the color value.",
            Self::Breathing => "LED uses a breathing-style animation.",
        }
    }
}

/// Bits per color channel, as enumerated by the daemon.
///
/// The wire code is *not* the bit count: code 1 means eight bits, code 2
/// means one bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, FromRepr)]
#[repr(u32)]
pub enum ColorDepth {
    ZeroBits = 0,
    EightBits = 1,
    OneBit = 2,
}

impl ColorDepth {
    #[allow(clippy::as_conversions)]
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn bits(self) -> u32 {
        match self {
            Self::ZeroBits => 0,
            Self::EightBits => 8,
            Self::OneBit => 1,
        }
    }

    /// Highest legal value for one color channel: `2^bits − 1`.
    pub const fn channel_max(self) -> u32 {
        (1 << self.bits()) - 1
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ZeroBits => "Zero bits per color: e.g. monochrome.",
            Self::EightBits => "Eight bits per color.",
            Self::OneBit => "One bit per color.",
        }
    }
}

/// An RGB color, one unsigned wire field per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}
