use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use std::path::PathBuf;

use frostpack::args::Args;
use frostpack::assemble::{assemble, resolve_platform};
use frostpack::config::Config;
use frostpack::display::{
    display_banner, display_phase, display_resources, display_summary, display_warnings,
    write_manifest, PhaseStatus,
};
use frostpack::freeze::{freeze_command, run_freeze};
use frostpack::preflight::run_preflight_checks;
use frostpack::resources::inventory_resources;
use frostpack::types::{BuildManifest, PackageMetadata};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(if args.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    // Load build defaults
    let config = Config::load("frostpack.conf")?;

    // Display banner
    display_banner();

    // Phase 1: Configuration assembly
    display_phase("Build configuration assembly", PhaseStatus::Starting);
    let platform = resolve_platform(&args.platform);
    let metadata = PackageMetadata {
        name: args.name.clone().unwrap_or_else(|| {
            args.entry_script
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "app".to_string())
        }),
        version: args
            .app_version
            .clone()
            .unwrap_or_else(|| config.default_version.clone()),
        description: args
            .description
            .clone()
            .unwrap_or_else(|| config.default_description.clone()),
    };
    let build = assemble(
        platform,
        &args.entry_script,
        args.icon.as_deref(),
        args.resources.as_deref(),
        metadata,
        &config.include_modules,
    )?;
    display_phase(
        "Build configuration assembly",
        PhaseStatus::Complete(build.included_modules.len()),
    );

    // Phase 2: Resource inventory
    let inventory = if build.resource_paths.is_empty() {
        display_phase("Resource inventory", PhaseStatus::Skipped("No resource directory"));
        Vec::new()
    } else {
        display_phase("Resource inventory", PhaseStatus::Starting);
        let entries = inventory_resources(&build.resource_paths)?;
        display_phase("Resource inventory", PhaseStatus::Complete(entries.len()));
        entries
    };

    // Phase 3: Preflight checks
    display_phase("Preflight checks", PhaseStatus::Starting);
    let warnings = run_preflight_checks(&build, &inventory);
    display_phase("Preflight checks", PhaseStatus::Complete(warnings.len()));

    let hostname = hostname::get()
        .unwrap_or_else(|_| std::ffi::OsString::from("unknown"))
        .to_string_lossy()
        .to_string();
    let timestamp = Local::now().format("%Y%m%d.%H%M");
    let manifest = BuildManifest {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        host: hostname.clone(),
        config: build.clone(),
        resources: inventory,
        warnings: warnings.clone(),
    };

    // Warnings stay visible even without --display
    if !warnings.is_empty() || args.display {
        display_warnings(&warnings);
    }

    if args.display {
        display_summary(&manifest, &config.freeze_tool);
        display_resources(&manifest.resources)?;
    }

    // Write the manifest with the export banner
    let mut exports = Vec::new();
    if args.json {
        let manifest_path = PathBuf::from(format!("frostpack_{}_{}.json", hostname, timestamp));
        write_manifest(&manifest, &manifest_path)?;
        exports.push((manifest_path.display().to_string(), manifest.resources.len()));
    }

    if !exports.is_empty() {
        println!("\n{}", "[✓] Manifest exported:".green().bold());
        for (path, count) in exports {
            println!("    📄 {} ({} resources)", path.bright_white(), count);
        }
    }

    // Phase 4: Freeze tool invocation
    if args.dry_run {
        display_phase("Freeze tool invocation", PhaseStatus::Skipped("Dry run"));
        let command = freeze_command(&build, &config.freeze_tool, &config.target_dir);
        println!("    {}", command.render().bright_black());
    } else {
        display_phase("Freeze tool invocation", PhaseStatus::Starting);
        let command = freeze_command(&build, &config.freeze_tool, &config.target_dir);
        run_freeze(&command)?;
        display_phase(
            "Freeze tool invocation",
            PhaseStatus::Complete(manifest.resources.len()),
        );
        println!(
            "\n{} {}",
            "[✓] Bundle written to".green().bold(),
            config.target_dir.display().to_string().bright_white()
        );
    }

    Ok(())
}
