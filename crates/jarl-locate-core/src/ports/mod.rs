//! Port definitions for the collaborators the resolver depends on.
//!
//! Core owns the traits; default implementations live in `adapters`.
//! Composition roots (the CLI, an editor host) inject concrete adapters.

mod diagnostics;
mod executable_search;
mod filesystem;

pub use diagnostics::DiagnosticSinkPort;
pub use executable_search::ExecutableSearchPort;
pub use filesystem::FileSystemPort;

#[cfg(test)]
pub use executable_search::MockExecutableSearchPort;
#[cfg(test)]
pub use filesystem::MockFileSystemPort;
