//! Resolution of the `jarl` language-server executable.
//!
//! Given the host's trust flag, the configured strategy and an optional
//! explicit path, [`ExecutableResolver`] picks one existing executable from
//! the bundled copy, the executable search path, or the configured path.
//! Every candidate it considers is reported to a [`DiagnosticSinkPort`].
//!
//! # Design
//!
//! - Domain types and ports live here; the CLI is only a composition root
//! - The extension root and platform family are explicit inputs
//! - No caching: every `resolve` call probes the filesystem afresh

#![deny(unused_crate_dependencies)]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod lookup;
pub mod ports;
pub mod resolver;
pub mod settings;

// Re-export commonly used types for convenience
pub use adapters::{RecordingDiagnostics, StdFileSystem, TracingDiagnostics, WhichSearch};
pub use domain::{
    ExecutableSource, ExecutableStrategy, PlatformFamily, Resolution, ResolveRequest,
    StrategySetting,
};
pub use error::ResolveError;
pub use lookup::{
    BUNDLED_BIN_DIR, BUNDLED_DIR, ExplicitMiss, bundled_executable_path, check_explicit,
    lookup_bundled, lookup_environment, lookup_explicit,
};
pub use ports::{DiagnosticSinkPort, ExecutableSearchPort, FileSystemPort};
pub use resolver::{ExecutableResolver, ResolverConfig, resolve_executable_path};
pub use settings::{ExecutableSettings, SettingsError};
