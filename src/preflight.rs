use crate::types::{BuildConfig, ResourceEntry};

// Static warning messages to avoid repeated allocations
mod warnings {
    pub const WINDOWED_NO_ICON: &str = "Windowed build has no icon; the executable gets the stock icon";
    pub const ICON_NOT_ICO: &str = "Icon file does not have a .ico extension";
    pub const ICON_IGNORED: &str = "Icon is only embedded on windowed builds; it will be ignored";
    pub const EMPTY_RESOURCES: &str = "Resource directory is empty; nothing will be bundled from it";
    pub const NAME_WHITESPACE: &str = "Package name contains whitespace";
    pub const VERSION_NOT_DOTTED: &str = "Version does not look like a dotted version string";
}

/// Non-fatal lint pass over an assembled configuration. Warnings are
/// surfaced and recorded in the manifest but never abort the build.
pub fn run_preflight_checks(config: &BuildConfig, resources: &[ResourceEntry]) -> Vec<String> {
    let mut flags = Vec::new();

    check_icon(config, &mut flags);
    check_resources(config, resources, &mut flags);
    check_metadata(config, &mut flags);

    flags
}

fn check_icon(config: &BuildConfig, flags: &mut Vec<String>) {
    match (&config.icon_path, config.base_subsystem.is_some()) {
        (None, true) => flags.push(warnings::WINDOWED_NO_ICON.to_string()),
        (Some(icon), windowed) => {
            let is_ico = icon
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("ico"))
                .unwrap_or(false);
            if !is_ico {
                flags.push(warnings::ICON_NOT_ICO.to_string());
            }
            if !windowed {
                flags.push(warnings::ICON_IGNORED.to_string());
            }
        }
        (None, false) => {}
    }
}

fn check_resources(config: &BuildConfig, resources: &[ResourceEntry], flags: &mut Vec<String>) {
    if !config.resource_paths.is_empty() && resources.is_empty() {
        flags.push(warnings::EMPTY_RESOURCES.to_string());
    }
}

fn check_metadata(config: &BuildConfig, flags: &mut Vec<String>) {
    if config.metadata.name.contains(char::is_whitespace) {
        flags.push(warnings::NAME_WHITESPACE.to_string());
    }

    let version = &config.metadata.version;
    let dotted = !version.is_empty()
        && version
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
    if !dotted {
        flags.push(warnings::VERSION_NOT_DOTTED.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PackageMetadata, Platform, WINDOWED_SUBSYSTEM};
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn windowed_config() -> BuildConfig {
        BuildConfig {
            platform: Platform::Windows,
            base_subsystem: Some(WINDOWED_SUBSYSTEM.to_string()),
            entry_script: PathBuf::from("notepad.pyw"),
            icon_path: Some(PathBuf::from("icon.ico")),
            included_modules: BTreeSet::from(["atexit".to_string()]),
            resource_paths: vec![PathBuf::from("resource")],
            metadata: PackageMetadata {
                name: "notepad".to_string(),
                version: "0.1".to_string(),
                description: "demo".to_string(),
            },
        }
    }

    fn entry(path: &str) -> ResourceEntry {
        ResourceEntry {
            path: PathBuf::from(path),
            size: 1,
            sha256: "00".to_string(),
        }
    }

    #[test]
    fn test_clean_config_has_no_warnings() {
        let config = windowed_config();
        let flags = run_preflight_checks(&config, &[entry("resource/readme.txt")]);
        assert!(flags.is_empty(), "unexpected warnings: {:?}", flags);
    }

    #[test]
    fn test_windowed_build_without_icon_warns() {
        let mut config = windowed_config();
        config.icon_path = None;
        let flags = run_preflight_checks(&config, &[entry("resource/readme.txt")]);
        assert_eq!(flags, vec![warnings::WINDOWED_NO_ICON]);
    }

    #[test]
    fn test_non_ico_icon_warns() {
        let mut config = windowed_config();
        config.icon_path = Some(PathBuf::from("icon.png"));
        let flags = run_preflight_checks(&config, &[entry("resource/readme.txt")]);
        assert_eq!(flags, vec![warnings::ICON_NOT_ICO]);
    }

    #[test]
    fn test_console_build_with_icon_warns() {
        let mut config = windowed_config();
        config.platform = Platform::Other;
        config.base_subsystem = None;
        let flags = run_preflight_checks(&config, &[entry("resource/readme.txt")]);
        assert_eq!(flags, vec![warnings::ICON_IGNORED]);
    }

    #[test]
    fn test_empty_resource_dir_warns() {
        let config = windowed_config();
        let flags = run_preflight_checks(&config, &[]);
        assert_eq!(flags, vec![warnings::EMPTY_RESOURCES]);
    }

    #[test]
    fn test_metadata_warnings() {
        let mut config = windowed_config();
        config.metadata.name = "note pad".to_string();
        config.metadata.version = "v1".to_string();
        let flags = run_preflight_checks(&config, &[entry("resource/readme.txt")]);
        assert!(flags.contains(&warnings::NAME_WHITESPACE.to_string()));
        assert!(flags.contains(&warnings::VERSION_NOT_DOTTED.to_string()));
    }
}
