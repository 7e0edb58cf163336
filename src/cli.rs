use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::Route;
use crate::defaults::Defaults;

/// Food meme coin generator
#[derive(Parser, Debug)]
#[command(version, about = "Generate food meme coins: meme image, recipe, launch parameters")]
pub struct Cli {
    /// Config file (default: <config dir>/food-meme/config.toml, if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Generation service base URL; overrides the config file
    #[arg(long, global = true, env = Defaults::BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Directory for the log file
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Prompt → meme → recipe → launch form (default)
    Launch,

    /// Show the stored meme and recipe for an address
    Lookup {
        /// Address the record is stored under
        address: String,
    },

    /// Run one generation without the UI and print the result as JSON
    Generate {
        /// Prompt text (may be empty)
        prompt: String,
    },
}

impl Cli {
    /// The screen to open, or `None` for headless commands.
    pub fn route(&self) -> Option<Route> {
        match &self.cmd {
            None | Some(Command::Launch) => Some(Route::Launch),
            Some(Command::Lookup { address }) => Some(Route::Lookup(address.clone())),
            Some(Command::Generate { .. }) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_is_the_default_route() {
        let cli = Cli::try_parse_from(["food-meme"]).unwrap();
        assert_eq!(cli.route(), Some(Route::Launch));
    }

    #[test]
    fn lookup_takes_an_address() {
        let cli = Cli::try_parse_from(["food-meme", "lookup", "0xabc"]).unwrap();
        assert_eq!(cli.route(), Some(Route::Lookup("0xabc".into())));
    }

    #[test]
    fn generate_is_headless() {
        let cli = Cli::try_parse_from(["food-meme", "--base-url", "http://svc:9", "generate", ""]).unwrap();
        assert_eq!(cli.route(), None);
        assert_eq!(cli.cmd, Some(Command::Generate { prompt: String::new() }));
        assert_eq!(cli.base_url.as_deref(), Some("http://svc:9"));
    }
}
