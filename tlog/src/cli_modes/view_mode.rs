use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use tlog_core::{Config, EntryFilter, LogQueryResult};
use tracing::debug;

/// Default mode: prints the header, the tag bar and the visible entries.
pub fn view_mode(
    cli: &Cli,
    renderer: &Renderer,
    config: &Config,
    result: &LogQueryResult,
) -> Result<CliModeResult> {
    let filter = selected_filter(cli, config);
    debug!(%filter, "viewing log");
    let view = result.log.view(&filter);

    renderer.print_view(&view, &filter, cli.totals);
    renderer.print_errors(&result.errors);
    Ok(CliModeResult::Finish)
}

/// `--tag` wins over the configured default filter.
fn selected_filter(cli: &Cli, config: &Config) -> EntryFilter {
    cli.tag
        .as_deref()
        .map(EntryFilter::for_tag)
        .unwrap_or_else(|| config.default_filter.clone())
}
