pub mod mine;
pub mod summary;

use assocmine_lib::util::parse_fraction;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "assocmine")]
#[command(about = "Mine frequent itemsets and association rules from a CSV table", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(help = "Path to the CSV dataset")]
    pub dataset: PathBuf,

    #[arg(help = "Minimum support, as a fraction (0.1) or percentage (10%)", value_parser = parse_fraction, allow_negative_numbers = true)]
    pub min_sup: f64,

    #[arg(help = "Minimum confidence, as a fraction (0.7) or percentage (70%)", value_parser = parse_fraction, allow_negative_numbers = true)]
    pub min_conf: f64,

    #[arg(long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'o', help = "Report file path (default: output.txt)")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Report format (text, json)")]
    pub format: Option<String>,

    #[arg(long, help = "Skip the terminal summary tables")]
    pub no_summary: bool,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, short = 'q', help = "Suppress non-error output")]
    pub quiet: bool,
}

pub fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_thresholds() {
        let cli = Cli::try_parse_from(["assocmine", "data.csv", "0.1", "70%"]).unwrap();
        assert_eq!(cli.dataset, PathBuf::from("data.csv"));
        assert_eq!(cli.min_sup, 0.1);
        assert_eq!(cli.min_conf, 0.7);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_missing_argument_is_usage_error() {
        assert!(Cli::try_parse_from(["assocmine", "data.csv", "0.1"]).is_err());
        assert!(Cli::try_parse_from(["assocmine", "data.csv", "abc", "0.5"]).is_err());
    }

    #[test]
    fn test_negative_threshold_reaches_validation() {
        let cli = Cli::try_parse_from(["assocmine", "data.csv", "-0.1", "0.5"]).unwrap();
        assert_eq!(cli.min_sup, -0.1);
    }
}
