mod cli;

use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use msgbar_common::MsgBarError;
use msgbar_config::{SiteConfig, StaticTheme, ThemeSource};
use msgbar_render::MsgBar;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("msgbar=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "msgbar=info".parse().unwrap()),
            ),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> Result<(), MsgBarError> {
    let site = load_site(args.config.as_deref())?;
    let theme = select_theme(site.theme, args.theme.as_deref())?;

    let bar = MsgBar::activate(&site.msgbar, theme.as_ref().map(|t| t as &dyn ThemeSource))?;

    let mut stdout = std::io::stdout().lock();

    if args.print_style {
        let json = serde_json::to_string_pretty(bar.style())
            .map_err(|e| MsgBarError::Other(format!("failed to serialize style: {e}")))?;
        writeln!(stdout, "{json}")?;
        return Ok(());
    }

    let body = read_input(args.input.as_deref())?;
    let out = bar.process_response(&args.content_type, &body);
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn load_site(path: Option<&Path>) -> Result<SiteConfig, MsgBarError> {
    let site = match path {
        Some(path) => {
            tracing::info!("Using config override: {}", path.display());
            msgbar_config::load_from_path(path)?
        }
        None => msgbar_config::load_config()?,
    };
    Ok(site)
}

/// A theme file given on the command line wins over the config's table.
fn select_theme(
    configured: Option<StaticTheme>,
    theme_file: Option<&Path>,
) -> Result<Option<StaticTheme>, MsgBarError> {
    match theme_file {
        Some(path) => Ok(Some(msgbar_config::load_theme_from_path(path)?)),
        None => Ok(configured),
    }
}

fn read_input(path: Option<&Path>) -> Result<String, MsgBarError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}
