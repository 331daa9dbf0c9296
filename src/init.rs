use std::path::Path;

use anyhow::{bail, Context, Result};
use dialoguer::{Confirm, Input};
use toml_edit::{DocumentMut, Item, Table, Value};

use crate::civil::{parse_civil, CivilDateTime, DEFAULT_TARGET};
use crate::config::{CatalogConfig, CONFIG_FILE};
use crate::provider::{default_zone, TimeService};

pub struct InitOptions {
    pub non_interactive: bool,
    pub target: Option<String>,
    pub zone: Option<String>,
}

fn check_zone(service: &dyn TimeService, zone: &str) -> Result<()> {
    if !service.zone_ids().iter().any(|z| z == zone) {
        bail!("unknown timezone '{zone}'");
    }
    Ok(())
}

fn parse_target(raw: &str) -> Result<CivilDateTime> {
    parse_civil(raw)
        .with_context(|| format!("invalid target '{raw}': expected YYYY-MM-DD[ HH:MM:SS]"))
}

pub fn cmd_init(root: &Path, service: &dyn TimeService, opts: InitOptions) -> Result<()> {
    let config_path = root.join(CONFIG_FILE);

    // Check for existing config
    if config_path.exists() {
        if opts.non_interactive {
            bail!("{CONFIG_FILE} already exists. Use interactive mode to overwrite.");
        }
        let overwrite = Confirm::new()
            .with_prompt(format!("{CONFIG_FILE} already exists. Overwrite?"))
            .default(false)
            .interact()?;
        if !overwrite {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let target = match opts.target {
        Some(ref raw) => parse_target(raw)?,
        None if opts.non_interactive => DEFAULT_TARGET,
        None => {
            let raw: String = Input::new()
                .with_prompt("Count down to (YYYY-MM-DD HH:MM:SS)")
                .default(DEFAULT_TARGET.to_string())
                .validate_with(|input: &String| -> Result<(), String> {
                    parse_civil(input)
                        .map(|_| ())
                        .ok_or_else(|| "expected YYYY-MM-DD[ HH:MM:SS]".to_string())
                })
                .interact_text()?;
            parse_target(&raw)?
        }
    };

    let zone = match opts.zone {
        Some(zone) => Some(zone),
        None if opts.non_interactive => None,
        None => {
            let pin = Confirm::new()
                .with_prompt("Pin a timezone instead of following the system zone?")
                .default(false)
                .interact()?;
            if pin {
                let zone: String = Input::new()
                    .with_prompt("Timezone")
                    .default(default_zone(service))
                    .interact_text()?;
                Some(zone)
            } else {
                None
            }
        }
    };
    if let Some(ref zone) = zone {
        check_zone(service, zone)?;
    }

    // Generate TOML
    let include_unmapped = CatalogConfig::default().include_unmapped;
    let content = build_config_toml(&target, zone.as_deref(), include_unmapped);
    std::fs::write(&config_path, content)
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    eprintln!("Created {CONFIG_FILE}");
    eprintln!("Try it out: countdown-tz countdown");
    Ok(())
}

fn build_config_toml(
    target: &CivilDateTime,
    zone: Option<&str>,
    include_unmapped: bool,
) -> String {
    let mut doc = DocumentMut::new();

    doc["target"] = Item::Value(Value::from(target.to_string()));

    if let Some(zone) = zone {
        doc["zone"] = Item::Value(Value::from(zone));
    }

    // [catalog] section
    let mut catalog_table = Table::new();
    catalog_table["include_unmapped"] = Item::Value(Value::from(include_unmapped));
    doc["catalog"] = Item::Table(catalog_table);

    doc.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::helpers::FixedTimeService;

    fn service() -> FixedTimeService {
        FixedTimeService::new()
            .with_country_zone("Europe/Paris", 1, "FR", "France")
            .with_ambient("Europe/Paris")
    }

    #[test]
    fn test_build_config_toml_basic() {
        let content = build_config_toml(&DEFAULT_TARGET, None, true);
        assert!(content.contains("target = \"2026-01-01 00:00:00\""));
        assert!(!content.contains("zone"));
        assert!(content.contains("include_unmapped = true"));
    }

    #[test]
    fn test_build_config_toml_with_catalog() {
        let content = build_config_toml(&DEFAULT_TARGET, Some("Asia/Tokyo"), false);
        assert!(content.contains("zone = \"Asia/Tokyo\""));
        assert!(content.contains("[catalog]"));
        assert!(content.contains("include_unmapped = false"));
    }

    #[test]
    fn test_build_config_toml_parseable() {
        let target = parse_civil("2027-03-04 05:06:07").unwrap();
        let content = build_config_toml(&target, Some("Europe/Paris"), true);
        let parsed: crate::config::Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.target(None).unwrap(), target);
        assert_eq!(parsed.zone.as_deref(), Some("Europe/Paris"));
        assert!(parsed.catalog.include_unmapped);
    }

    #[test]
    fn test_cmd_init_non_interactive_creates_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let opts = InitOptions {
            non_interactive: true,
            target: None,
            zone: None,
        };
        let result = cmd_init(dir.path(), &service(), opts);
        assert!(result.is_ok(), "cmd_init should succeed: {:?}", result);
        let content = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        let parsed: crate::config::Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.target(None).unwrap(), DEFAULT_TARGET);
        assert_eq!(parsed.zone, None);
    }

    #[test]
    fn test_cmd_init_with_flags() {
        let dir = tempfile::TempDir::new().unwrap();
        let opts = InitOptions {
            non_interactive: true,
            target: Some("2030-01-01".into()),
            zone: Some("Europe/Paris".into()),
        };
        cmd_init(dir.path(), &service(), opts).unwrap();
        let content = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(content.contains("2030-01-01 00:00:00"));
        assert!(content.contains("Europe/Paris"));
    }

    #[test]
    fn test_cmd_init_rejects_unknown_zone() {
        let dir = tempfile::TempDir::new().unwrap();
        let opts = InitOptions {
            non_interactive: true,
            target: None,
            zone: Some("Mars/Base".into()),
        };
        let err = cmd_init(dir.path(), &service(), opts).unwrap_err().to_string();
        assert!(err.contains("unknown timezone 'Mars/Base'"), "got: {err}");
        assert!(!dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_cmd_init_rejects_bad_target() {
        let dir = tempfile::TempDir::new().unwrap();
        let opts = InitOptions {
            non_interactive: true,
            target: Some("someday".into()),
            zone: None,
        };
        assert!(cmd_init(dir.path(), &service(), opts).is_err());
    }

    #[test]
    fn test_cmd_init_non_interactive_fails_if_exists() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "zone = \"UTC\"").unwrap();
        let opts = InitOptions {
            non_interactive: true,
            target: None,
            zone: None,
        };
        let err_msg = cmd_init(dir.path(), &service(), opts)
            .unwrap_err()
            .to_string();
        assert!(
            err_msg.contains("already exists"),
            "error should mention 'already exists', got: {}",
            err_msg
        );
    }
}
