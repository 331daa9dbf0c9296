use std::io::Write;

use anyhow::{Context, Result};
use colored::*;

use crate::cli::Format;
use crate::model::*;
use crate::search::{display_name, flag_url};

fn colorize_remaining(remaining: &TimeRemaining) -> ColoredString {
    if remaining.is_exhausted() {
        remaining.to_string().green().bold()
    } else if remaining.days == 0 && remaining.hours == 0 {
        remaining.to_string().yellow().bold()
    } else {
        remaining.to_string().bold()
    }
}

pub fn format_countdown_line(report: &CountdownReport) -> String {
    let mut line = format!(
        "{}  {}",
        colorize_remaining(&report.remaining),
        report.display_name.cyan()
    );
    if report.exhausted {
        line.push_str(&format!("  {}", "Target reached".green()));
    }
    line
}

pub fn print_countdown(report: &CountdownReport, format: &Format) -> Result<()> {
    match format {
        Format::Text => {
            println!("{}", format_countdown_line(report));
            println!(
                "{}",
                format!("until {} in {}", report.target, report.zone).dimmed()
            );
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(report).context("failed to serialize")?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Redraw a live frame in place (text) or emit one JSON line per tick.
pub fn print_countdown_frame(report: &CountdownReport, format: &Format) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        Format::Text => {
            write!(stdout, "\r\x1b[2K{}", format_countdown_line(report))?;
        }
        Format::Json => {
            let json = serde_json::to_string(report).context("failed to serialize")?;
            writeln!(stdout, "{}", json)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

pub fn print_zones(result: &ZoneSearchResult, format: &Format) -> Result<()> {
    match format {
        Format::Text => {
            if result.zones.is_empty() {
                println!("No zones match '{}'", result.query);
                return Ok(());
            }

            for zone in &result.zones {
                let mut line = format!("  {}  {}", display_name(zone).bold(), zone.id.dimmed());
                if let Some(url) = flag_url(zone) {
                    line.push_str(&format!("  {}", url.dimmed()));
                }
                println!("{}", line);
            }

            if result.query.is_empty() {
                println!("\n{} zones", result.match_count);
            } else {
                println!("\n{} zones match '{}'", result.match_count, result.query);
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(result).context("failed to serialize")?;
            println!("{}", json);
        }
    }
    Ok(())
}
