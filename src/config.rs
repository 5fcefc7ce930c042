use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

pub const DEFAULT_DECK_DIR: &str = "flashcards";
pub const DEFAULT_LOG_FILE: &str = "flipcards.log";

#[derive(Parser, Debug)]
#[command(
    name = "flipcards",
    version,
    about = "Flip through CSV question/answer decks in the terminal"
)]
pub struct Cli {
    /// CSV file to open right away (title, question, answer columns)
    pub file: Option<PathBuf>,

    /// Directory listed in the deck picker
    #[arg(long, env = "FLIPCARDS_DIR", default_value = DEFAULT_DECK_DIR)]
    pub dir: PathBuf,

    #[arg(long, env = "FLIPCARDS_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, env = "FLIPCARDS_LOG_LEVEL", default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level '{}'", value))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub initial_file: Option<PathBuf>,
    pub deck_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            initial_file: self.file,
            deck_dir: self.dir,
            log_file: self.log_file,
            log_level: self.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = Cli::try_parse_from(["flipcards"]).unwrap().into_config();
        assert_eq!(config.initial_file, None);
        if std::env::var_os("FLIPCARDS_DIR").is_none() {
            assert_eq!(config.deck_dir, PathBuf::from(DEFAULT_DECK_DIR));
        }
        if std::env::var_os("FLIPCARDS_LOG_LEVEL").is_none() {
            assert_eq!(config.log_level, LevelFilter::Info);
        }
    }

    #[test]
    fn test_cli_arguments() {
        let config = Cli::try_parse_from([
            "flipcards",
            "decks/geo.csv",
            "--dir",
            "decks",
            "--log-file",
            "/tmp/fc.log",
            "--log-level",
            "debug",
        ])
        .unwrap()
        .into_config();

        assert_eq!(config.initial_file, Some(PathBuf::from("decks/geo.csv")));
        assert_eq!(config.deck_dir, PathBuf::from("decks"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/fc.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_cli_rejects_bad_log_level() {
        assert!(Cli::try_parse_from(["flipcards", "--log-level", "loud"]).is_err());
    }
}
