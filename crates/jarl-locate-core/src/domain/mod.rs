//! Core domain types for executable resolution.
//!
//! These are pure types with no filesystem or process access.

mod platform;
mod resolution;
mod strategy;

pub use platform::PlatformFamily;
pub use resolution::{ExecutableSource, Resolution, ResolveRequest};
pub use strategy::{ExecutableStrategy, StrategySetting};
