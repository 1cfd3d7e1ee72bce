use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Windowed-subsystem marker understood by the freeze tool. Executables
/// built with this base run detached from any console window.
pub const WINDOWED_SUBSYSTEM: &str = "Win32GUI";

/// Runtime-lifecycle hook module. Not reachable by static dependency
/// analysis, so it must always be force-included in the bundle.
pub const RUNTIME_HOOK_MODULE: &str = "atexit";

/// Target platform family for the produced executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Other,
}

impl Platform {
    pub fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Other => "other",
        }
    }
}

/// Name, version and description stamped onto the produced package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// Fully assembled description of one freeze build, consumed by the
/// external freeze tool. Constructed once per invocation and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub platform: Platform,
    /// Present iff `platform == Windows`.
    pub base_subsystem: Option<String>,
    pub entry_script: PathBuf,
    pub icon_path: Option<PathBuf>,
    pub included_modules: BTreeSet<String>,
    pub resource_paths: Vec<PathBuf>,
    pub metadata: PackageMetadata,
}

/// One regular file found under the resource directory, with its size
/// and content digest for the build manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub path: PathBuf,
    pub size: u64,
    pub sha256: String,
}

/// Manifest written alongside the build output: what was assembled,
/// what will be bundled, and which preflight warnings fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildManifest {
    pub generated_at: String,
    pub host: String,
    pub config: BuildConfig,
    pub resources: Vec<ResourceEntry>,
    pub warnings: Vec<String>,
}
