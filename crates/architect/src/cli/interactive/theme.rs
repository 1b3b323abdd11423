//! Custom dialoguer theme and banner for Architect interactive mode.

use console::{style, Style};
use dialoguer::theme::ColorfulTheme;

/// Returns a `ColorfulTheme` configured with Architect's visual identity.
///
/// - Prompt prefix: green `?`
/// - Active item indicator: green `▸`
/// - Success prefix: green `✓`
/// - Error prefix: red `✗`
pub fn architect_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("?".to_string()).for_stderr().green(),
        prompt_style: Style::new().for_stderr().bold(),
        prompt_suffix: style("›".to_string()).for_stderr().bright().black(),
        active_item_prefix: style("▸".to_string()).for_stderr().green(),
        active_item_style: Style::new().for_stderr().green(),
        success_prefix: style("✓".to_string()).for_stderr().green(),
        success_suffix: style("·".to_string()).for_stderr().bright().black(),
        error_prefix: style("✗".to_string()).for_stderr().red(),
        error_style: Style::new().for_stderr().red(),
        values_style: Style::new().for_stderr().green(),
        ..ColorfulTheme::default()
    }
}

/// Prints the Architect banner to stderr.
///
/// All output goes to stderr so stdout remains clean for piped prompts.
pub fn print_banner() {
    let version_line = format!("Architect v{}", architect_core::VERSION);
    let tagline = "Multi-modal prompt blueprint generator";

    // Inner width: enough for the tagline + 4 chars padding (2 each side)
    let inner_width = tagline.len() + 4;

    let top = format!("  ╔{:═<width$}╗", "", width = inner_width);
    let mid1 = format!("  ║{:^width$}║", version_line, width = inner_width);
    let mid2 = format!("  ║{:^width$}║", tagline, width = inner_width);
    let bot = format!("  ╚{:═<width$}╝", "", width = inner_width);

    let green = Style::new().for_stderr().green();

    eprintln!();
    eprintln!("{}", green.apply_to(&top));
    eprintln!("{}", green.apply_to(&mid1));
    eprintln!("{}", green.apply_to(&mid2));
    eprintln!("{}", green.apply_to(&bot));
    eprintln!();
}
