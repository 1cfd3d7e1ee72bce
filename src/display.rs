use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::resources::total_size;
use crate::types::{BuildManifest, ResourceEntry};

/// Display application banner
pub fn display_banner() {
    let banner = r#"
    ____                 __                   __
   / __/________  _____/ /_____  ____ ______/ /__
  / /_/ ___/ __ \/ ___/ __/ __ \/ __ `/ ___/ //_/
 / __/ /  / /_/ (__  ) /_/ /_/ / /_/ / /__/ ,<
/_/ /_/   \____/____/\__/ .___/\__,_/\___/_/|_|
                       /_/
"#;
    println!("{}", banner.bright_cyan());
    println!(
        "{}",
        "    ❄  Freeze-Build Configuration Assembler"
            .bright_white()
            .bold()
    );
    println!(
        "{}",
        "    Assemble • Inventory • Freeze\n".bright_black()
    );
}

/// Display a phase indicator with spinner-style prefix
pub fn display_phase(phase: &str, status: PhaseStatus) {
    match status {
        PhaseStatus::Starting => {
            println!("{} {}", "▶".bright_cyan().bold(), phase.cyan());
        }
        PhaseStatus::Complete(count) => {
            println!(
                "{} {} {}",
                "✓".bright_green().bold(),
                phase.green(),
                format!("({} items)", count).bright_black()
            );
        }
        PhaseStatus::Skipped(reason) => {
            println!(
                "{} {} {}",
                "⊘".bright_yellow(),
                phase.yellow(),
                format!("[{}]", reason).bright_black()
            );
        }
    }
}

pub enum PhaseStatus {
    Starting,
    Complete(usize),
    Skipped(&'static str),
}

/// Display summary panel with the key facts of the assembled build
pub fn display_summary(manifest: &BuildManifest, tool: &str) {
    let config = &manifest.config;
    let subsystem = config.base_subsystem.as_deref().unwrap_or("console");
    let icon = config
        .icon_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    let includes = config
        .included_modules
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let resources = format!(
        "{} files / {}",
        manifest.resources.len(),
        human_size(total_size(&manifest.resources))
    );

    println!();
    println!(
        "{}",
        "╔══════════════════════════════════════════════════════════════════╗".bright_blue()
    );
    println!(
        "{}{}{}",
        "║".bright_blue(),
        "                          BUILD SUMMARY                           ".bright_white().bold(),
        "║".bright_blue()
    );
    println!(
        "{}",
        "╠══════════════════════════════════════════════════════════════════╣".bright_blue()
    );

    let rows = [
        ("Package", format!(
            "{} {} — {}",
            config.metadata.name, config.metadata.version, config.metadata.description
        )),
        ("Platform", format!("{} ({})", config.platform.as_str(), subsystem)),
        ("Entry script", config.entry_script.display().to_string()),
        ("Icon", icon),
        ("Includes", includes),
        ("Resources", resources),
        ("Freeze tool", tool.to_string()),
        ("Host", format!("{} @ {}", manifest.host, manifest.generated_at)),
    ];

    for (label, value) in rows {
        println!(
            "{} {:<13} {:<50} {}",
            "║".bright_blue(),
            label.bright_white(),
            truncate(&value, 50),
            "║".bright_blue()
        );
    }

    println!(
        "{}",
        "╚══════════════════════════════════════════════════════════════════╝".bright_blue()
    );
    println!();
}

/// Display preflight warnings in a highlighted panel
pub fn display_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        println!("{}", "  ✅ Preflight checks passed".bright_green().bold());
        return;
    }

    println!(
        "{}",
        "┌────────────────────────── ⚠ PREFLIGHT WARNINGS ──────────────────────────┐"
            .bright_yellow()
    );
    for warning in warnings {
        println!("│ {} {}", "►".bright_yellow(), warning.yellow());
    }
    println!(
        "{}",
        "└───────────────────────────────────────────────────────────────────────────┘"
            .bright_yellow()
    );
    println!();
}

/// Display the resource inventory in a formatted table
pub fn display_resources(entries: &[ResourceEntry]) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    // Get terminal width and set table to fit
    let term_width = terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or(120);

    table.set_width(term_width);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Resource").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Size").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("SHA-256").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);

    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.path.display().to_string()),
            Cell::new(human_size(entry.size)),
            Cell::new(&entry.sha256[..16.min(entry.sha256.len())]),
        ]);
    }

    println!("{}", table);
    Ok(())
}

/// Write the build manifest as pretty-printed JSON
pub fn write_manifest<P: AsRef<Path>>(manifest: &BuildManifest, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        format!("{:<width$}", value, width = max)
    } else {
        let cut: String = value.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KiB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MiB");
    }

    #[test]
    fn test_truncate_pads_and_cuts() {
        assert_eq!(truncate("abc", 5), "abc  ");
        assert_eq!(truncate("abcdefgh", 5), "ab...");
    }
}
