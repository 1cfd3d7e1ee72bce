use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use log::debug;

use crate::error::ConfigurationError;
use crate::types::{BuildConfig, PackageMetadata, Platform, RUNTIME_HOOK_MODULE, WINDOWED_SUBSYSTEM};

lazy_static::lazy_static! {
    /// Known spellings of the windowed desktop platform. Anything not in
    /// this table builds as a console-attached executable.
    static ref WINDOWS_ALIASES: HashMap<&'static str, Platform> = {
        let mut m = HashMap::new();
        m.insert("windows", Platform::Windows);
        m.insert("win32", Platform::Windows);
        m.insert("win", Platform::Windows);
        m
    };
}

/// Resolve a platform identifier string to a platform family.
pub fn resolve_platform(platform_id: &str) -> Platform {
    let normalized = platform_id.trim().to_lowercase();
    WINDOWS_ALIASES
        .get(normalized.as_str())
        .copied()
        .unwrap_or(Platform::Other)
}

/// Platform identifier of the machine running the build, used as the
/// CLI default so cross-builds stay an explicit choice.
pub fn host_platform_id() -> &'static str {
    if cfg!(target_os = "windows") {
        "windows"
    } else {
        std::env::consts::OS
    }
}

/// Assemble a `BuildConfig` from an explicit platform and build inputs.
///
/// Pure construction: the only I/O is existence checks on the supplied
/// paths. Either every field is populated or a `ConfigurationError` is
/// returned; no partial config ever reaches the freeze tool.
pub fn assemble(
    platform: Platform,
    entry_script: &Path,
    icon_path: Option<&Path>,
    resource_dir: Option<&Path>,
    metadata: PackageMetadata,
    extra_modules: &[String],
) -> Result<BuildConfig, ConfigurationError> {
    if !entry_script.is_file() {
        return Err(ConfigurationError::EntryScriptNotFound {
            path: entry_script.to_path_buf(),
        });
    }

    if let Some(icon) = icon_path {
        if !icon.is_file() {
            return Err(ConfigurationError::IconNotFound {
                path: icon.to_path_buf(),
            });
        }
    }

    if let Some(dir) = resource_dir {
        if !dir.is_dir() {
            return Err(ConfigurationError::ResourceDirNotFound {
                path: dir.to_path_buf(),
            });
        }
    }

    // GUI builds on windows must not open a console window alongside the
    // application; everywhere else the executable stays console-attached.
    let base_subsystem = if platform.is_windows() {
        Some(WINDOWED_SUBSYSTEM.to_string())
    } else {
        None
    };

    let mut included_modules = BTreeSet::new();
    included_modules.insert(RUNTIME_HOOK_MODULE.to_string());
    for module in extra_modules {
        let module = module.trim();
        if !module.is_empty() {
            included_modules.insert(module.to_string());
        }
    }

    let resource_paths = resource_dir.map(|d| vec![d.to_path_buf()]).unwrap_or_default();

    debug!(
        "assembled config: platform={}, base={:?}, includes={}, resources={}",
        platform.as_str(),
        base_subsystem,
        included_modules.len(),
        resource_paths.len()
    );

    Ok(BuildConfig {
        platform,
        base_subsystem,
        entry_script: entry_script.to_path_buf(),
        icon_path: icon_path.map(Path::to_path_buf),
        included_modules,
        resource_paths,
        metadata,
    })
}
