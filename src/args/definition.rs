//! Command-line argument definition.

use clap::Parser;

/// cinesea - search a movie database from the terminal
#[derive(Parser, Debug)]
#[command(name = "cinesea")]
#[command(version)]
#[command(about = "Search a movie database from the terminal", long_about = None)]
pub struct Args {
    /// Search once from the command line, print the results, and exit
    #[arg(short, long)]
    pub search: Option<String>,

    /// Results page to print with --search
    #[arg(short, long, default_value_t = 1, requires = "search")]
    pub page: u32,

    /// Print --search results as JSON instead of a table
    #[arg(long, requires = "search")]
    pub json: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration directory (default: ~/.config/cinesea)
    #[arg(long)]
    pub config_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Defaults apply when no flags are given.
    fn defaults_without_flags() {
        let args = Args::try_parse_from(["cinesea"]).expect("parse");
        assert!(args.search.is_none());
        assert_eq!(args.page, 1);
        assert!(!args.json);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    /// What: One-shot search flags parse; page and json require a search.
    ///
    /// Inputs:
    /// - `--search dune --page 2 --json`, then `--json` alone.
    ///
    /// Output:
    /// - First parses; second is rejected.
    fn search_flags_parse_and_require_search() {
        let args = Args::try_parse_from(["cinesea", "--search", "dune", "--page", "2", "--json"])
            .expect("parse");
        assert_eq!(args.search.as_deref(), Some("dune"));
        assert_eq!(args.page, 2);
        assert!(args.json);
        assert!(Args::try_parse_from(["cinesea", "--json"]).is_err());
    }
}
