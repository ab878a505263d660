//! Candidates command handler.
//!
//! Shows the resolver inputs and the bundled candidate in `key = value`
//! format. The search path is not consulted, so the command is safe to run
//! in an untrusted workspace.

use std::fmt;
use std::path::PathBuf;

use jarl_locate_core::settings::{EXECUTABLE_PATH_KEY, STRATEGY_KEY};
use jarl_locate_core::{
    FileSystemPort, PlatformFamily, StdFileSystem, StrategySetting, bundled_executable_path,
};

use crate::bootstrap::CliConfig;

/// Snapshot of resolver inputs and the bundled candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateReport {
    pub platform: PlatformFamily,
    pub trusted: bool,
    pub strategy: StrategySetting,
    pub explicit_path: Option<String>,
    pub bundled_path: PathBuf,
    pub bundled_exists: bool,
}

impl CandidateReport {
    pub fn collect(config: &CliConfig, fs: &dyn FileSystemPort) -> Self {
        let platform = config.resolver.platform;
        let bundled_path = bundled_executable_path(&config.resolver.extension_root, platform);
        let bundled_exists = fs.exists(&bundled_path);

        Self {
            platform,
            trusted: config.request.trusted,
            strategy: config.request.strategy.clone(),
            explicit_path: config.request.explicit_path.clone(),
            bundled_path,
            bundled_exists,
        }
    }
}

impl fmt::Display for CandidateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "platform = {}", self.platform)?;
        writeln!(f, "binary_name = {}", self.platform.binary_name())?;
        writeln!(f, "trusted = {}", self.trusted)?;
        writeln!(f, "{STRATEGY_KEY} = {}", self.strategy)?;
        writeln!(
            f,
            "{EXECUTABLE_PATH_KEY} = {}",
            self.explicit_path.as_deref().unwrap_or("<unset>")
        )?;
        writeln!(f, "bundled_path = {}", self.bundled_path.display())?;
        write!(f, "bundled_exists = {}", self.bundled_exists)
    }
}

/// Execute the candidates command.
pub fn execute(config: &CliConfig) {
    println!("{}", CandidateReport::collect(config, &StdFileSystem));
}
