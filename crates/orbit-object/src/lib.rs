//! orbit-object: Per-channel object audio parameters
//!
//! The central type is [`ObjectParameters`]: one record per audio
//! channel-segment, carrying position, gain, extent, divergence, timing and
//! interaction metadata. Every field keeps a well-defined stored value plus
//! an independent presence bit recording whether it was explicitly set, so
//! a pipeline can distinguish "default" from "explicitly default" when
//! merging, overriding and diffing records.
//!
//! Around the record:
//! - [`Param`] / [`ParamMask`] — the closed field vocabulary and its
//!   presence bitmap
//! - [`ExcludedZone`] — named axis-aligned boxes a rendered position must
//!   avoid
//! - [`Modifier`] — shareable rotation/translation/scale/gain deltas with a
//!   custom-effect hook
//! - codec surfaces — `serde_json::Value` documents and the flattened
//!   string map, both speaking the canonical field names

mod codec;
mod modifier;
mod object;
mod param;
mod zone;

pub use codec::*;
pub use modifier::*;
pub use object::*;
pub use param::*;
pub use zone::*;
