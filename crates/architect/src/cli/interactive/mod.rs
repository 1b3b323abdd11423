//! Interactive CLI mode: guided experience for bare `architect` invocation.
//!
//! When `architect` is invoked with no subcommand on a TTY, this module
//! provides a menu-driven interface that delegates to the same engine as the
//! flag-based CLI.

pub mod compose;
pub mod setup;
pub mod theme;

use architect_core::credentials::from_model_config;
use architect_core::Config;
use console::Style;
use dialoguer::Select;

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
///
/// Use this to wrap `interact_text()` / `interact()` calls that lack an `_opt`
/// variant, so interrupts exit the current flow cleanly instead of panicking.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Main menu options presented to the user.
const MENU_ITEMS: &[&str] = &[
    "Compose a prompt",
    "Deconstruct a media file",
    "Configure settings",
    "Exit",
];

/// Entry point for interactive mode. Called when `architect` is invoked with
/// no subcommand on a TTY.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    theme::print_banner();

    let theme = theme::architect_theme();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => compose::guided_compose(config).await?,
            Some(1) => compose::guided_deconstruct(config).await?,
            Some(2) => show_config(config)?,
            Some(3) | None => break, // Exit or Ctrl+C / Esc
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Interactive config viewer: shows a summary of current settings and offers
/// to display the full TOML or the config file path.
fn show_config(config: &Config) -> anyhow::Result<()> {
    let theme = theme::architect_theme();
    let dim = Style::new().for_stderr().dim();
    let green = Style::new().for_stderr().green();
    let label = Style::new().for_stderr().bold();

    loop {
        // Config summary
        eprintln!();
        eprintln!("  {}", green.apply_to("Current configuration:"));
        eprintln!();

        let config_path = Config::default_path();
        let path_note = if config_path.exists() {
            "(exists)"
        } else {
            "(using defaults)"
        };

        eprintln!(
            "    {:<20} {} {}",
            label.apply_to("Config file:"),
            config_path.display(),
            dim.apply_to(path_note)
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Model:"),
            config.model.name
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Endpoint:"),
            config.model.endpoint
        );
        eprintln!(
            "    {:<20} temperature {}, thinking budget {}",
            label.apply_to("Sampling:"),
            config.model.temperature,
            config.model.thinking_budget
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("API key:"),
            key_summary(config)
        );
        eprintln!(
            "    {:<20} up to {} MB per file",
            label.apply_to("Media:"),
            config.limits.max_media_size_mb
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Log level:"),
            config.logging.level
        );
        eprintln!();

        // Action menu
        let items = &["View full config (TOML)", "Show config file path", "Back"];

        let selection = Select::with_theme(&theme)
            .with_prompt("Configuration")
            .items(items)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => match config.to_toml() {
                Ok(toml) => {
                    eprintln!();
                    eprintln!("{}", dim.apply_to("─".repeat(50)));
                    eprintln!("{toml}");
                    eprintln!("{}", dim.apply_to("─".repeat(50)));
                    eprintln!();
                }
                Err(e) => {
                    let err = Style::new().for_stderr().red();
                    eprintln!("  {} Failed to serialize config: {e}", err.apply_to("✗"));
                    eprintln!();
                }
            },
            Some(1) => {
                eprintln!();
                eprintln!("  {}", Config::default_path().display());
                eprintln!();
            }
            Some(2) | None => break, // Back or Esc / Ctrl+C
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Summarise where the API key is coming from, without printing it.
fn key_summary(config: &Config) -> String {
    let source = from_model_config(&config.model);
    if source.api_key().is_some() {
        format!("detected via {}", source.describe())
    } else {
        format!("not set ({} is empty)", source.describe())
    }
}
