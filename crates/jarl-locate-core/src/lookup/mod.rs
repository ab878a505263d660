//! The three candidate lookups.
//!
//! Each lookup probes one source, writes exactly one trace line describing
//! the outcome, and returns `None` for a missing candidate. Absence is an
//! expected result, never an error.

mod bundled;
mod environment;
mod explicit;

pub use bundled::{BUNDLED_BIN_DIR, BUNDLED_DIR, bundled_executable_path, lookup_bundled};
pub use environment::lookup_environment;
pub use explicit::{ExplicitMiss, check_explicit, lookup_explicit};
