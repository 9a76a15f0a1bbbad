use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use tlog_core::LogQueryResult;

pub fn tags_mode(cli: &Cli, renderer: &Renderer, result: &LogQueryResult) -> Result<CliModeResult> {
    if !cli.tags {
        return Ok(CliModeResult::NothingToDo);
    }

    let tags = result.log.tags();
    if tags.is_empty() {
        renderer.print_info("No tags found.");
    } else {
        renderer.print_info(&format!("{} unique tags found.", tags.len()));
        renderer.print_tags(&tags);
    }
    renderer.print_errors(&result.errors);
    Ok(CliModeResult::Finish)
}
