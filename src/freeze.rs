use log::{debug, info};
use std::path::Path;
use std::process::Command;

use crate::error::FreezeError;
use crate::types::BuildConfig;

/// Concrete command line handed to the external freeze tool. Built as a
/// plain value so the construction can be tested without spawning
/// anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreezeCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl FreezeCommand {
    pub fn render(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.contains(' ') {
                line.push('"');
                line.push_str(arg);
                line.push('"');
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

/// Translate an assembled `BuildConfig` into the freeze tool's option
/// surface. The tool's bundling algorithm stays opaque; everything it
/// needs is passed here.
pub fn freeze_command(config: &BuildConfig, tool: &str, target_dir: &Path) -> FreezeCommand {
    let mut args = vec![config.entry_script.display().to_string()];

    args.push("--target-dir".to_string());
    args.push(target_dir.display().to_string());
    args.push("--target-name".to_string());
    args.push(config.metadata.name.clone());

    if let Some(base) = &config.base_subsystem {
        args.push("--base-name".to_string());
        args.push(base.clone());
    }

    if let Some(icon) = &config.icon_path {
        args.push("--icon".to_string());
        args.push(icon.display().to_string());
    }

    if !config.included_modules.is_empty() {
        let modules: Vec<&str> = config.included_modules.iter().map(String::as_str).collect();
        args.push("--includes".to_string());
        args.push(modules.join(","));
    }

    for resource in &config.resource_paths {
        args.push("--include-files".to_string());
        args.push(resource.display().to_string());
    }

    FreezeCommand {
        program: tool.to_string(),
        args,
    }
}

/// Run the freeze tool and wait for it. A non-zero tool exit becomes an
/// error so the build command exits non-zero as well.
pub fn run_freeze(command: &FreezeCommand) -> Result<(), FreezeError> {
    info!("invoking freeze tool: {}", command.render());

    let status = Command::new(&command.program)
        .args(&command.args)
        .status()
        .map_err(|source| FreezeError::Launch {
            tool: command.program.clone(),
            source,
        })?;

    debug!("freeze tool exited: {}", status);

    if !status.success() {
        return Err(FreezeError::ToolFailed {
            tool: command.program.clone(),
            status: status.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PackageMetadata, Platform, WINDOWED_SUBSYSTEM};
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn config(platform: Platform) -> BuildConfig {
        BuildConfig {
            platform,
            base_subsystem: platform
                .is_windows()
                .then(|| WINDOWED_SUBSYSTEM.to_string()),
            entry_script: PathBuf::from("notepad.pyw"),
            icon_path: Some(PathBuf::from("icon.ico")),
            included_modules: BTreeSet::from(["atexit".to_string(), "json".to_string()]),
            resource_paths: vec![PathBuf::from("resource")],
            metadata: PackageMetadata {
                name: "notepad".to_string(),
                version: "0.1".to_string(),
                description: "demo".to_string(),
            },
        }
    }

    #[test]
    fn test_windowed_command_carries_base_name() {
        let cmd = freeze_command(&config(Platform::Windows), "cxfreeze", Path::new("build/exe"));
        assert_eq!(cmd.program, "cxfreeze");
        assert_eq!(
            cmd.args,
            vec![
                "notepad.pyw",
                "--target-dir",
                "build/exe",
                "--target-name",
                "notepad",
                "--base-name",
                WINDOWED_SUBSYSTEM,
                "--icon",
                "icon.ico",
                "--includes",
                "atexit,json",
                "--include-files",
                "resource",
            ]
        );
    }

    #[test]
    fn test_console_command_has_no_base_name() {
        let cmd = freeze_command(&config(Platform::Other), "cxfreeze", Path::new("build/exe"));
        assert!(!cmd.args.contains(&"--base-name".to_string()));
        assert!(!cmd.args.iter().any(|a| a == WINDOWED_SUBSYSTEM));
    }

    #[test]
    fn test_no_icon_no_resources() {
        let mut cfg = config(Platform::Other);
        cfg.icon_path = None;
        cfg.resource_paths.clear();
        let cmd = freeze_command(&cfg, "cxfreeze", Path::new("dist"));
        assert!(!cmd.args.contains(&"--icon".to_string()));
        assert!(!cmd.args.contains(&"--include-files".to_string()));
    }

    #[test]
    fn test_render_quotes_spaced_args() {
        let mut cfg = config(Platform::Other);
        cfg.metadata.name = "note pad".to_string();
        let cmd = freeze_command(&cfg, "cxfreeze", Path::new("dist"));
        assert!(cmd.render().contains("\"note pad\""));
    }
}
