// ── LED façade ──

use std::fmt;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use remus_broker::PropertyBroker;

use crate::caps::ensure_in_range;
use crate::convert::{decode_color, encode_color};
use crate::error::Error;
use crate::model::{Color, ColorDepth, LedMode};
use crate::proxy::PropertyProxy;

const INTERFACE: &str = "Led";

/// Highest accepted effect duration in milliseconds; the 10 s ceiling
/// itself is out of range.
const EFFECT_DURATION_MAX: u32 = 9_999;

/// Brightness ceiling for the 8-bit brightness channel.
const BRIGHTNESS_MAX: u32 = 255;

/// One LED of a device.
///
/// The color-channel ceiling is a capability: it derives from the color
/// depth the daemon reports at construction (`2^bits − 1`).
pub struct LedInterface {
    proxy: PropertyProxy,
    index: u32,
    depth: ColorDepth,
}

impl LedInterface {
    /// Construct the façade, blocking on the initial capability fetch.
    pub fn new(broker: Arc<dyn PropertyBroker>) -> Result<Self, Error> {
        let proxy = PropertyProxy::new(broker, INTERFACE);
        let index = proxy.get_u32("Index")?;

        let code = proxy.get_u32("ColorDepth")?;
        let depth = ColorDepth::from_repr(code)
            .ok_or_else(|| Error::protocol(format!("unknown color depth code {code}")))?;

        info!(index, "the LED reports color depth {}: {}", depth, depth.description());

        Ok(Self {
            proxy,
            index,
            depth,
        })
    }

    /// Daemon-assigned LED index.
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Color depth reported at construction.
    pub const fn color_depth(&self) -> ColorDepth {
        self.depth
    }

    /// Highest legal value per color channel for this LED.
    pub const fn channel_max(&self) -> u32 {
        self.depth.channel_max()
    }

    pub fn mode(&self) -> Result<LedMode, Error> {
        let code = self.proxy.get_u32("Mode")?;
        LedMode::from_repr(code)
            .ok_or_else(|| Error::protocol(format!("unknown LED mode code {code}")))
    }

    pub fn set_mode(&self, mode: LedMode) -> Result<(), Error> {
        debug!("setting {} mode to {}", self, mode);
        self.proxy.set("Mode", json!(mode.code()))
    }

    pub fn color(&self) -> Result<Color, Error> {
        decode_color(&self.proxy.get("Color")?)
    }

    /// Validate each channel against the depth-derived ceiling, then write.
    pub fn set_color(&self, color: Color) -> Result<(), Error> {
        let max = self.channel_max();
        ensure_in_range("Color", max, color.red)?;
        ensure_in_range("Color", max, color.green)?;
        ensure_in_range("Color", max, color.blue)?;

        debug!("setting {} color to {}", self, color);
        self.proxy.set("Color", encode_color(color))
    }

    pub fn brightness(&self) -> Result<u32, Error> {
        self.proxy.get_u32("Brightness")
    }

    pub fn set_brightness(&self, brightness: u32) -> Result<(), Error> {
        ensure_in_range("Brightness", BRIGHTNESS_MAX, brightness)?;
        self.proxy.set("Brightness", json!(brightness))
    }

    pub fn effect_duration(&self) -> Result<u32, Error> {
        self.proxy.get_u32("EffectDuration")
    }

    /// Write the effect duration; the ceiling is strict (10 000 ms is out
    /// of range).
    pub fn set_effect_duration(&self, duration: u32) -> Result<(), Error> {
        ensure_in_range("EffectDuration", EFFECT_DURATION_MAX, duration)?;
        self.proxy.set("EffectDuration", json!(duration))
    }
}

impl fmt::Debug for LedInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedInterface")
            .field("index", &self.index)
            .field("depth", &self.depth)
            .finish()
    }
}

impl fmt::Display for LedInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} no. {}", self.proxy.interface(), self.index)
    }
}
