use clap::Parser;
use std::path::PathBuf;

/// Plan step viewer for AI-generated execution plans
#[derive(Parser, Debug, Clone)]
#[command(name = "planview", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "PLANVIEW_CONFIG", default_value = "planview.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "PLANVIEW_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "PLANVIEW_PORT")]
    pub port: Option<u16>,

    /// Disable live reload of the configuration file and plans directory
    #[arg(long, env = "PLANVIEW_NO_WATCH")]
    pub no_watch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["planview"]);
        assert_eq!(cli.config, PathBuf::from("planview.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(!cli.no_watch);
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "planview",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--no-watch",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert!(cli.no_watch);
    }
}
