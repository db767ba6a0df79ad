//! Property façades over the daemon's per-device objects.
//!
//! Each façade composes the wire codec and the validator around one broker
//! handle. Construction is the single blocking setup point: it reads the
//! daemon-assigned index, performs the trusted first value read where the
//! type's shape is fixed, and fetches the capability set -- immutable from
//! then on. There is no inheritance between façades; shared behavior is
//! composed from [`PropertyProxy`](crate::proxy::PropertyProxy) and the
//! capability types.

pub mod button;
pub mod led;
pub mod resolution;
