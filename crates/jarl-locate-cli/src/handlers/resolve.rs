//! Resolve command handler.

use std::sync::Arc;

use jarl_locate_core::{DiagnosticSinkPort, ExecutableResolver, Resolution};
use tracing::info;

use crate::bootstrap::CliConfig;
use crate::error::CliError;

/// Resolve the executable and print its path to stdout.
///
/// The resolution trace goes to the tracing subscriber on stderr.
pub async fn execute(config: &CliConfig) -> Result<(), CliError> {
    let resolution = resolve_with(
        ExecutableResolver::with_defaults(config.resolver.clone()),
        config,
    )
    .await?;

    println!("{}", resolution.path().display());
    Ok(())
}

/// Resolve with a caller-provided diagnostic sink.
pub async fn execute_with_sink(
    config: &CliConfig,
    sink: Arc<dyn DiagnosticSinkPort>,
) -> Result<Resolution, CliError> {
    resolve_with(
        ExecutableResolver::with_defaults(config.resolver.clone()).with_diagnostics(sink),
        config,
    )
    .await
}

async fn resolve_with(
    resolver: ExecutableResolver,
    config: &CliConfig,
) -> Result<Resolution, CliError> {
    let resolution = resolver.resolve(&config.request).await?;
    info!(
        source = %resolution.source,
        path = %resolution.path().display(),
        "Resolved jarl executable"
    );
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jarl_locate_core::{
        ExecutableSource, PlatformFamily, RecordingDiagnostics, ResolveRequest, ResolverConfig,
    };

    #[test]
    fn untrusted_resolves_bundled_copy() {
        let root = tempfile::tempdir().unwrap();
        let bin = root.path().join("bundled").join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let binary = bin.join(PlatformFamily::current().binary_name());
        std::fs::write(&binary, b"stub").unwrap();

        let config = CliConfig {
            resolver: ResolverConfig::for_current_platform(root.path()),
            request: ResolveRequest::new(false, "environment"),
        };
        let sink = Arc::new(RecordingDiagnostics::new());

        let resolution = tokio_test::block_on(execute_with_sink(&config, sink.clone())).unwrap();

        assert_eq!(resolution.path, binary);
        assert_eq!(resolution.source, ExecutableSource::Bundled);
        assert_eq!(sink.lines().len(), 3);
    }

    #[test]
    fn untrusted_without_bundled_maps_to_unavailable() {
        let root = tempfile::tempdir().unwrap();
        let config = CliConfig {
            resolver: ResolverConfig::for_current_platform(root.path()),
            request: ResolveRequest::new(false, "bundled"),
        };

        let err = tokio_test::block_on(execute_with_sink(
            &config,
            Arc::new(RecordingDiagnostics::new()),
        ))
        .unwrap_err();
        assert_eq!(err.exit_code(), 69);
    }
}
