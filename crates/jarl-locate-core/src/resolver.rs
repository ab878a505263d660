//! Executable resolver.
//!
//! Picks one existing `jarl` executable according to workspace trust and the
//! configured strategy:
//!
//! | trusted | strategy      | lookups, in order          |
//! |---------|---------------|----------------------------|
//! | no      | (ignored)     | bundled                    |
//! | yes     | `bundled`     | bundled, then environment  |
//! | yes     | `environment` | environment, then bundled  |
//! | yes     | `path`        | explicit path              |
//!
//! An untrusted workspace never consults the search path or the configured
//! path, since either could point at an attacker-controlled binary. A missing
//! explicit path is a misconfiguration and is not papered over by falling back.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::adapters::{StdFileSystem, TracingDiagnostics, WhichSearch};
use crate::domain::{
    ExecutableSource, ExecutableStrategy, PlatformFamily, Resolution, ResolveRequest,
    StrategySetting,
};
use crate::error::ResolveError;
use crate::lookup::{
    bundled_executable_path, lookup_bundled, lookup_environment, lookup_explicit,
};
use crate::ports::{DiagnosticSinkPort, ExecutableSearchPort, FileSystemPort};

/// Host-provided facts that do not change between resolutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Install root of the extension, resolved once by the host.
    pub extension_root: PathBuf,
    /// Platform family used to pick the binary name.
    pub platform: PlatformFamily,
}

impl ResolverConfig {
    pub fn new(extension_root: impl Into<PathBuf>, platform: PlatformFamily) -> Self {
        Self {
            extension_root: extension_root.into(),
            platform,
        }
    }

    /// Config for the platform this binary was compiled for.
    pub fn for_current_platform(extension_root: impl Into<PathBuf>) -> Self {
        Self::new(extension_root, PlatformFamily::current())
    }
}

/// Resolves the `jarl` executable from the bundled copy, the search path, or
/// an explicit path.
///
/// Stateless across calls: each [`resolve`](Self::resolve) probes afresh.
#[derive(Clone)]
pub struct ExecutableResolver {
    config: ResolverConfig,
    fs: Arc<dyn FileSystemPort>,
    search: Arc<dyn ExecutableSearchPort>,
    diagnostics: Arc<dyn DiagnosticSinkPort>,
}

impl ExecutableResolver {
    pub fn new(
        config: ResolverConfig,
        fs: Arc<dyn FileSystemPort>,
        search: Arc<dyn ExecutableSearchPort>,
        diagnostics: Arc<dyn DiagnosticSinkPort>,
    ) -> Self {
        Self {
            config,
            fs,
            search,
            diagnostics,
        }
    }

    /// Resolver using `std::fs`, the process `PATH`, and `tracing` output.
    pub fn with_defaults(config: ResolverConfig) -> Self {
        Self::new(
            config,
            Arc::new(StdFileSystem),
            Arc::new(WhichSearch::new()),
            Arc::new(TracingDiagnostics),
        )
    }

    /// Replace the diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSinkPort>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Where the bundled executable is expected.
    pub fn bundled_path(&self) -> PathBuf {
        bundled_executable_path(&self.config.extension_root, self.config.platform)
    }

    /// Resolve the executable for one request.
    ///
    /// The returned path existed when it was checked; it may be gone by the
    /// time the caller spawns it.
    pub async fn resolve(&self, request: &ResolveRequest) -> Result<Resolution, ResolveError> {
        debug!(
            trusted = request.trusted,
            strategy = %request.strategy,
            extension_root = %self.config.extension_root.display(),
            platform = %self.config.platform,
            "Resolving jarl executable"
        );

        if !request.trusted {
            let bundled = self.bundled_path();
            self.log(format!(
                "Workspace is not trusted, using bundled executable: {}",
                bundled.display()
            ));

            return match self.bundled() {
                Some(path) => Ok(self.select(ExecutableSource::Bundled, path)),
                None => Err(ResolveError::UntrustedBundledMissing { bundled }),
            };
        }

        let strategy = match &request.strategy {
            StrategySetting::Known(strategy) => *strategy,
            StrategySetting::Unrecognized(raw) => {
                return Err(ResolveError::UnknownStrategy(raw.clone()));
            }
        };

        match strategy {
            ExecutableStrategy::Bundled => {
                if let Some(path) = self.bundled() {
                    return Ok(self.select(ExecutableSource::Bundled, path));
                }

                self.log(
                    "Bundled executable not found, falling back to environment executable"
                        .to_string(),
                );
                if let Some(path) = self.environment().await {
                    return Ok(self.select(ExecutableSource::Environment, path));
                }

                Err(ResolveError::StrategyBundledExhausted {
                    bundled: self.bundled_path(),
                })
            }
            ExecutableStrategy::Environment => {
                if let Some(path) = self.environment().await {
                    return Ok(self.select(ExecutableSource::Environment, path));
                }

                self.log(
                    "Environment executable not found, falling back to bundled executable"
                        .to_string(),
                );
                if let Some(path) = self.bundled() {
                    return Ok(self.select(ExecutableSource::Bundled, path));
                }

                Err(ResolveError::StrategyEnvironmentExhausted {
                    bundled: self.bundled_path(),
                })
            }
            ExecutableStrategy::Path => {
                let explicit = request.explicit_path.as_deref();
                match lookup_explicit(self.fs.as_ref(), self.diagnostics.as_ref(), explicit) {
                    Some(path) => Ok(self.select(ExecutableSource::Explicit, path)),
                    None => Err(ResolveError::StrategyPathMissing {
                        path: explicit.filter(|raw| !raw.is_empty()).map(PathBuf::from),
                    }),
                }
            }
        }
    }

    fn bundled(&self) -> Option<PathBuf> {
        lookup_bundled(
            self.fs.as_ref(),
            self.diagnostics.as_ref(),
            &self.config.extension_root,
            self.config.platform,
        )
    }

    async fn environment(&self) -> Option<PathBuf> {
        lookup_environment(
            self.search.as_ref(),
            self.diagnostics.as_ref(),
            self.config.platform,
        )
        .await
    }

    fn select(&self, source: ExecutableSource, path: PathBuf) -> Resolution {
        self.log(format!("Using {}: {}", source.label(), path.display()));
        Resolution { path, source }
    }

    fn log(&self, line: String) {
        self.diagnostics.append(line);
    }
}

impl std::fmt::Debug for ExecutableResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutableResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Convenience for hosts that only need the path.
pub async fn resolve_executable_path(
    extension_root: &Path,
    request: &ResolveRequest,
) -> Result<PathBuf, ResolveError> {
    ExecutableResolver::with_defaults(ResolverConfig::for_current_platform(extension_root))
        .resolve(request)
        .await
        .map(Resolution::into_path)
}
