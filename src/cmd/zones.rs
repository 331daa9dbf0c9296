use anyhow::Result;

use crate::catalog::Catalog;
use crate::cli::Format;
use crate::config::Config;
use crate::output::print_zones;
use crate::provider::TimeService;
use crate::search::search_zones;

pub fn cmd_zones(
    service: &dyn TimeService,
    config: &Config,
    format: &Format,
    query: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
    let catalog = Catalog::build(service, config.catalog.include_unmapped);
    let query = query.unwrap_or_default();
    let mut result = search_zones(&catalog, &query);

    // Apply limit
    if let Some(n) = limit {
        result.zones.truncate(n);
    }

    print_zones(&result, format)
}
