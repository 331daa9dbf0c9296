use std::ops::ControlFlow;

use anyhow::{Context, Result};
use time::OffsetDateTime;

use crate::civil::{parse_instant, CivilDateTime};
use crate::cli::Format;
use crate::config::Config;
use crate::countdown::CountdownEngine;
use crate::model::ZoneRecord;
use crate::output::{print_countdown, print_countdown_frame};
use crate::provider::TimeService;
use crate::ticker::Ticker;

use super::{build_report, resolve_zone, zone_record};

pub struct CountdownOptions {
    pub zone: Option<String>,
    pub target: Option<String>,
    pub now: Option<String>,
    pub once: bool,
}

pub fn cmd_countdown(
    service: &dyn TimeService,
    config: &Config,
    format: &Format,
    opts: CountdownOptions,
) -> Result<()> {
    let target = config.target(opts.target.as_deref())?;
    let zone = resolve_zone(service, config, opts.zone.as_deref());
    let record = zone_record(service, &zone);

    if let Some(ref raw_now) = opts.now {
        let now = parse_instant(raw_now)
            .with_context(|| format!("invalid --now '{raw_now}': expected RFC 3339"))?;
        return print_single(service, &record, target, now, format);
    }

    if opts.once {
        return print_single(service, &record, target, OffsetDateTime::now_utc(), format);
    }

    run_live(service, config, &record, target, format)
}

fn print_single(
    service: &dyn TimeService,
    record: &ZoneRecord,
    target: CivilDateTime,
    now: OffsetDateTime,
    format: &Format,
) -> Result<()> {
    let mut engine = CountdownEngine::new(service, target);
    let remaining = engine.tick(&record.id, now);
    print_countdown(&build_report(record, &target, remaining), format)
}

/// Tick once per interval until Ctrl+C or until the target is reached.
pub(crate) fn run_live(
    service: &dyn TimeService,
    config: &Config,
    record: &ZoneRecord,
    target: CivilDateTime,
    format: &Format,
) -> Result<()> {
    let ticker = Ticker::new(config.tick_interval()?);
    let handle = ticker.stop_handle();
    ctrlc::set_handler(move || handle.stop()).context("failed to set Ctrl+C handler")?;

    let mut engine = CountdownEngine::new(service, target);
    let mut failure: Option<anyhow::Error> = None;

    tracing::info!(zone = %record.id, %target, "countdown started");
    ticker.start();
    ticker.run(|_| {
        let remaining = engine.tick(&record.id, OffsetDateTime::now_utc());
        let report = build_report(record, &target, remaining);
        if let Err(e) = print_countdown_frame(&report, format) {
            failure = Some(e);
            return ControlFlow::Break(());
        }
        if report.exhausted && !config.keep_running {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    if matches!(format, Format::Text) {
        println!();
    }
    eprintln!("Countdown stopped.");

    match failure {
        Some(e) => Err(e.context("failed to draw countdown")),
        None => Ok(()),
    }
}
