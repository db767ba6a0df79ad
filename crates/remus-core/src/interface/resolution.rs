// ── Resolution façade ──

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use remus_broker::PropertyBroker;

use crate::caps::SupportedResolutions;
use crate::convert::{decode_resolution, decode_resolution_list, encode_resolution};
use crate::error::Error;
use crate::model::{Axes, Resolution, ResolutionKind};
use crate::proxy::PropertyProxy;

const INTERFACE: &str = "Resolution";

/// One sensor resolution slot of a device.
///
/// The very first read of the `Resolution` property is trusted and fixes
/// the shape this device speaks for the life of the interface; every later
/// write must conform to it and to the advertised scalar set.
pub struct ResolutionInterface {
    proxy: PropertyProxy,
    index: u32,
    supported: SupportedResolutions,
}

impl ResolutionInterface {
    /// Construct the façade, blocking on the initial capability fetch.
    pub fn new(broker: Arc<dyn PropertyBroker>) -> Result<Self, Error> {
        let proxy = PropertyProxy::new(broker, INTERFACE);
        let index = proxy.get_u32("Index")?;

        // Trusted, unchecked: the daemon's current value defines the shape.
        let first = decode_resolution(&proxy.get("Resolution")?)?;
        let scalars = decode_resolution_list(&proxy.get("Resolutions")?)?;
        let supported = SupportedResolutions::new(first.kind(), scalars);

        info!(index, "the device supports resolutions: {}", supported);

        Ok(Self {
            proxy,
            index,
            supported,
        })
    }

    /// Daemon-assigned slot index.
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// The shape fixed at construction.
    pub const fn kind(&self) -> ResolutionKind {
        self.supported.kind()
    }

    /// The capability set fetched at construction.
    pub const fn supported_resolutions(&self) -> &SupportedResolutions {
        &self.supported
    }

    /// Current resolution, decoded and returned as-is (daemon values are
    /// trusted; only the wire shape is checked).
    pub fn resolution(&self) -> Result<Resolution, Error> {
        debug!("getting the value of {}", self);
        decode_resolution(&self.proxy.get("Resolution")?)
    }

    /// Validate and write a resolution. No wire traffic on rejection.
    pub fn set_resolution(&self, resolution: Resolution) -> Result<(), Error> {
        info!("setting {} to {}", self, resolution);
        self.supported.check(&resolution)?;
        self.proxy.set("Resolution", encode_resolution(&resolution)?)
    }

    /// Write a shared-axis scalar.
    pub fn set_axis(&self, dpi: u16) -> Result<(), Error> {
        self.set_resolution(Resolution::Axis(dpi))
    }

    /// Write a per-axis pair.
    pub fn set_axes(&self, axes: Axes) -> Result<(), Error> {
        self.set_resolution(Resolution::Axes(axes))
    }

    pub fn is_active(&self) -> Result<bool, Error> {
        self.proxy.get_bool("IsActive")
    }

    pub fn is_default(&self) -> Result<bool, Error> {
        self.proxy.get_bool("IsDefault")
    }

    /// Make this slot the active resolution.
    pub fn set_active(&self) -> Result<(), Error> {
        debug!("activating {}", self);
        self.proxy.call("SetActive")
    }

    /// Make this slot the default resolution.
    pub fn set_default(&self) -> Result<(), Error> {
        debug!("setting {} by default", self);
        self.proxy.call("SetDefault")
    }
}

impl fmt::Display for ResolutionInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} no. {}", self.proxy.interface(), self.index)
    }
}
