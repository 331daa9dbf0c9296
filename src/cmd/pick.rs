use anyhow::{bail, Result};
use dialoguer::{Input, Select};

use crate::catalog::Catalog;
use crate::cli::Format;
use crate::config::Config;
use crate::provider::{default_zone, TimeService};
use crate::search::display_name;
use crate::state::{SelectionEvent, SelectionState};

use super::countdown::run_live;
use super::zone_record;

/// Labels shown in the picker for the zones matching `query`.
fn pick_items(catalog: &Catalog, query: &str) -> Vec<(String, String)> {
    crate::search::filter(catalog, query)
        .iter()
        .map(|record| (record.id.clone(), format!("{}  [{}]", display_name(record), record.id)))
        .collect()
}

/// State after the zone list closes; `None` when the user cancelled it.
fn apply_choice(
    state: SelectionState,
    items: &[(String, String)],
    chosen: Option<usize>,
) -> Option<SelectionState> {
    let (id, _) = items.get(chosen?)?;
    Some(state.reduce(SelectionEvent::ZonePicked(id.clone())))
}

pub fn cmd_pick(
    service: &dyn TimeService,
    config: &Config,
    format: &Format,
    target: Option<String>,
) -> Result<()> {
    let target = config.target(target.as_deref())?;
    let catalog = Catalog::build(service, config.catalog.include_unmapped);
    if catalog.is_empty() {
        bail!("no timezones available to pick from");
    }

    let ambient = config.zone.clone().unwrap_or_else(|| default_zone(service));
    let mut state = SelectionState::default()
        .reduce(SelectionEvent::AmbientZoneResolved(ambient))
        .reduce(SelectionEvent::DropdownToggled);

    while state.dropdown_open {
        let query: String = Input::new()
            .with_prompt("Search country or zone")
            .allow_empty(true)
            .interact_text()?;
        state = state.reduce(SelectionEvent::QueryEdited(query));

        let items = pick_items(&catalog, &state.query);
        if items.is_empty() {
            eprintln!("No zones match '{}'", state.query);
            continue;
        }

        let labels: Vec<&str> = items.iter().map(|(_, label)| label.as_str()).collect();
        let default_idx = state
            .selected
            .as_deref()
            .and_then(|sel| items.iter().position(|(id, _)| id == sel))
            .unwrap_or(0);
        let chosen = Select::new()
            .with_prompt(format!("{} zones", items.len()))
            .items(&labels)
            .default(default_idx)
            .interact_opt()?;

        match apply_choice(state, &items, chosen) {
            Some(next) => state = next,
            None => {
                eprintln!("Aborted.");
                return Ok(());
            }
        }
    }

    let Some(zone) = state.selected else {
        bail!("no timezone selected");
    };
    let record = zone_record(service, &zone);
    run_live(service, config, &record, target, format)
}
