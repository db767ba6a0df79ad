//! Daemon service configuration.
//!
//! The original design kept the daemon's bus name in process-wide mutable
//! state, set once and read everywhere. Here it is an explicit value the
//! embedding application builds (or loads) and threads into broker
//! construction. Layering: compiled defaults, then an optional TOML file,
//! then `REMUS_*` environment variables.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bus name of the system configuration daemon.
pub const SERVICE_NAME: &str = "org.freedesktop.ratbag1";

/// Bus name of the development daemon.
pub const DEVEL_SERVICE_NAME: &str = "org.freedesktop.ratbag_devel1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Which daemon the client layer should talk to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Talk to the development daemon instead of the system one.
    #[serde(default)]
    pub devel: bool,

    /// Explicit bus name override; wins over `devel`.
    #[serde(default)]
    pub service: Option<String>,
}

impl ServiceConfig {
    /// Defaults layered with `REMUS_*` environment variables
    /// (e.g. `REMUS_DEVEL=true`).
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("REMUS_"))
            .extract()?)
    }

    /// Like [`load`](Self::load), with a TOML file between defaults and
    /// environment.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("REMUS_"))
            .extract()?)
    }

    /// The bus name to connect to.
    pub fn service_name(&self) -> &str {
        match &self.service {
            Some(name) => name,
            None if self.devel => DEVEL_SERVICE_NAME,
            None => SERVICE_NAME,
        }
    }
}
