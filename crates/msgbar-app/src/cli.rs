use clap::Parser;
use std::path::PathBuf;

/// msgbar: inject a notification bar into HTML responses.
#[derive(Parser, Debug)]
#[command(name = "msgbar", version, about)]
pub struct Args {
    /// HTML file to rewrite. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Site config file path override.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Theme YAML file; replaces the config's [theme] table.
    #[arg(short = 't', long)]
    pub theme: Option<PathBuf>,

    /// Content-Type of the response being rewritten.
    #[arg(long, default_value = "text/html; charset=utf-8")]
    pub content_type: String,

    /// Print the resolved style as JSON and exit.
    #[arg(long)]
    pub print_style: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["msgbar"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.config.is_none());
        assert!(args.theme.is_none());
        assert_eq!(args.content_type, "text/html; charset=utf-8");
        assert!(!args.print_style);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "msgbar",
            "-c",
            "site.toml",
            "--theme",
            "ocean.yaml",
            "--content-type",
            "application/json",
            "--print-style",
            "--log-level",
            "debug",
            "page.html",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("page.html")));
        assert_eq!(args.config, Some(PathBuf::from("site.toml")));
        assert_eq!(args.theme, Some(PathBuf::from("ocean.yaml")));
        assert_eq!(args.content_type, "application/json");
        assert!(args.print_style);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
