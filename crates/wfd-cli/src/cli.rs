use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wfd",
    about = "Workflow Diff: what was added, removed, or edited between two workflow versions",
    version,
)]
pub struct Cli {
    /// Old version: a workflow directory or its workflow.json
    pub old: PathBuf,

    /// New version: a workflow directory or its workflow.json
    pub new: PathBuf,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the full log to this file instead of stderr
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Loader configuration (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Warn about and skip malformed records instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Do not read protoblock manifests
    #[arg(long)]
    pub no_protoblocks: bool,

    /// Never colour section headers
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_paths() {
        let cli = Cli::try_parse_from(["wfd", "old", "new"]).unwrap();
        assert_eq!(cli.old, PathBuf::from("old"));
        assert_eq!(cli.new, PathBuf::from("new"));
        assert!(!cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn requires_both_paths() {
        assert!(Cli::try_parse_from(["wfd", "old"]).is_err());
    }

    #[test]
    fn parse_log_file() {
        let cli = Cli::try_parse_from(["wfd", "-l", "run.log", "a", "b"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::try_parse_from([
            "wfd", "--verbose", "--skip-invalid", "--no-protoblocks", "--no-color",
            "--config", "wfd.toml", "a", "b",
        ])
        .unwrap();
        assert!(cli.verbose && cli.skip_invalid && cli.no_protoblocks && cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("wfd.toml")));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["wfd", "--format", "json", "a", "b"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
