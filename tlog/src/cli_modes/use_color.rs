use std::io::{self, IsTerminal};

use crate::{Cli, render::ColorMode};

pub fn use_color(cli: &Cli) -> bool {
    match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn explicit_modes_win() {
        let always = Cli::parse_from(["tlog", "--color", "always"]);
        let never = Cli::parse_from(["tlog", "--color", "never"]);
        assert!(use_color(&always));
        assert!(!use_color(&never));
    }
}
