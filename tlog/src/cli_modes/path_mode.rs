use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use tlog_core::Config;

pub fn path_mode(cli: &Cli, renderer: &Renderer, config: &Config) -> Result<CliModeResult> {
    if !cli.path {
        return Ok(CliModeResult::NothingToDo);
    }
    renderer.print_plain(&config.log_file.display().to_string());
    Ok(CliModeResult::Finish)
}
