//! Guided prompt composition flows.
//!
//! Two entry points share one loop: composing a blueprint from an idea, and
//! deconstructing an attached media file. Both walk through API key check →
//! input intake → generation → result view with export actions, driving the
//! same `Session` state machine and engine as the flag-based CLI.

use std::path::PathBuf;
use std::sync::Arc;

use architect_core::credentials::{from_model_config, CredentialSource, StaticCredential};
use architect_core::llm::GeminiModel;
use architect_core::media::load_attachment;
use architect_core::{
    render_export, Architect, ArchitectError, ArchitectResult, Category, Config, ExportFormat,
    MediaAttachment, Phase, Session,
};
use console::Style;
use dialoguer::{Confirm, Input, Select};

use super::setup::{ensure_api_key, KeyStatus};
use super::theme::architect_theme;
use crate::cli::generate::create_spinner;

/// How the flow gathers its input.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Intake {
    /// Category + idea text first, media optional.
    IdeaFirst,
    /// Media file first (required), idea text becomes optional context.
    MediaFirst,
}

/// Compose a blueprint from an idea, optionally attaching media.
pub async fn guided_compose(config: &Config) -> anyhow::Result<()> {
    run_flow(config, Intake::IdeaFirst).await
}

/// Deconstruct a media file, with optional context text.
pub async fn guided_deconstruct(config: &Config) -> anyhow::Result<()> {
    run_flow(config, Intake::MediaFirst).await
}

async fn run_flow(config: &Config, intake: Intake) -> anyhow::Result<()> {
    let theme = architect_theme();
    let warn = Style::new().for_stderr().yellow();

    // ── Step 1: API key ─────────────────────────────────────────────────

    let credentials: Arc<dyn CredentialSource> = match ensure_api_key(config)? {
        KeyStatus::Present => Arc::from(from_model_config(&config.model)),
        KeyStatus::SessionKey(key) => Arc::new(StaticCredential::new(key)),
        KeyStatus::Skipped => {
            eprintln!(
                "  {}",
                warn.apply_to("A Gemini API key is required to generate.")
            );
            return Ok(());
        }
    };
    let model = Arc::new(GeminiModel::new(credentials.clone(), &config.model));
    let engine = Architect::new(credentials, model, config.instructions.clone());

    let mut session = Session::new();

    loop {
        // ── Step 2: Input intake ────────────────────────────────────────

        match intake {
            Intake::IdeaFirst => {
                let categories = Category::selectable();
                let labels: Vec<&str> = categories.iter().map(|c| c.label()).collect();
                let default_idx = categories
                    .iter()
                    .position(|c| *c == session.category())
                    .unwrap_or(0);

                let choice = Select::with_theme(&theme)
                    .with_prompt("Prompt category")
                    .items(&labels)
                    .default(default_idx)
                    .interact_opt()?;
                let Some(idx) = choice else {
                    return Ok(()); // Esc / Ctrl+C
                };
                session.select_category(categories[idx]);

                let Some(idea) = super::handle_interrupt(
                    Input::<String>::with_theme(&theme)
                        .with_prompt("Describe your idea (may be empty when attaching media)")
                        .allow_empty(true)
                        .interact_text(),
                )?
                else {
                    return Ok(());
                };
                session.set_draft(idea);

                let attach = Confirm::with_theme(&theme)
                    .with_prompt("Attach an image or video file?")
                    .default(false)
                    .interact_opt()?;

                if attach == Some(true) {
                    if let Some(attachment) = prompt_media_file(config, &theme)? {
                        announce_attachment(&attachment);
                        session.attach_media(attachment);
                    }
                }
            }
            Intake::MediaFirst => {
                let Some(attachment) = prompt_media_file(config, &theme)? else {
                    return Ok(()); // Nothing to deconstruct
                };
                announce_attachment(&attachment);
                session.attach_media(attachment);

                let Some(context) = super::handle_interrupt(
                    Input::<String>::with_theme(&theme)
                        .with_prompt("Context for the deconstruction (optional)")
                        .allow_empty(true)
                        .interact_text(),
                )?
                else {
                    return Ok(());
                };
                session.set_draft(context);
            }
        }

        // ── Step 3: Generate, retrying the same request on failure ──────

        loop {
            if let Err(e) = session.begin_generation() {
                eprintln!("  {}", warn.apply_to(format!("{e}")));
                break; // back to intake
            }

            let spinner = create_spinner(&config.model.name);
            let outcome = engine
                .architect(session.category(), session.draft(), session.media())
                .await;
            spinner.finish_and_clear();

            match outcome {
                Ok(blueprint) => session.complete(blueprint),
                Err(e) => session.fail(e),
            }

            // ── Step 4: Result ──────────────────────────────────────────

            match session.phase() {
                Phase::Success => {
                    if let Some(blueprint) = session.result() {
                        show_result(blueprint);
                    }
                    match result_menu(&theme, config, &session)? {
                        AfterSuccess::ComposeAnother => {
                            session.set_draft("");
                            session.clear_media();
                        }
                        AfterSuccess::StartOver => session.reset(),
                        AfterSuccess::Done => return Ok(()),
                    }
                    break; // back to intake
                }
                Phase::Failed => {
                    if let Some(error) = session.failure() {
                        show_failure(error);
                    }
                    let retry = Confirm::with_theme(&theme)
                        .with_prompt("Try again?")
                        .default(true)
                        .interact_opt()?;
                    if retry != Some(true) {
                        return Ok(());
                    }
                    // Same draft, media, and category go out again.
                }
                _ => break,
            }
        }
    }
}

/// Prompt for a media file path, re-prompting until a loadable file is given.
/// Empty input cancels.
fn prompt_media_file(
    config: &Config,
    theme: &dialoguer::theme::ColorfulTheme,
) -> anyhow::Result<Option<MediaAttachment>> {
    let warn = Style::new().for_stderr().yellow();

    loop {
        let Some(raw_path) = super::handle_interrupt(
            Input::<String>::with_theme(theme)
                .with_prompt("Path to image or video (empty to skip)")
                .allow_empty(true)
                .interact_text(),
        )?
        else {
            return Ok(None);
        };

        if raw_path.trim().is_empty() {
            return Ok(None);
        }

        let path = PathBuf::from(shellexpand::tilde(raw_path.trim()).into_owned());
        match load_attachment(&path, config.limits.max_media_size_mb) {
            Ok(attachment) => return Ok(Some(attachment)),
            Err(e) => {
                eprintln!("  {}", warn.apply_to(format!("{e}")));
                continue;
            }
        }
    }
}

fn announce_attachment(attachment: &MediaAttachment) {
    let dim = Style::new().for_stderr().dim();
    eprintln!(
        "  {}",
        dim.apply_to(format!(
            "Attached {} ({}); category switched to MEDIA_ANALYSIS",
            attachment.file_name, attachment.kind
        ))
    );
}

/// Render a finished blueprint to stderr.
fn show_result(blueprint: &ArchitectResult) {
    let label = Style::new().for_stderr().green().bold();

    eprintln!();
    eprintln!("  {}", label.apply_to("Analysis"));
    for line in blueprint.analysis.lines() {
        eprintln!("    {line}");
    }
    eprintln!();
    eprintln!("  {}", label.apply_to("Optimized prompt"));
    for line in blueprint.optimized_prompt.lines() {
        eprintln!("    {line}");
    }
    eprintln!();
    eprintln!("  {}", label.apply_to("Pro tip"));
    for line in blueprint.pro_tip.lines() {
        eprintln!("    {line}");
    }
    eprintln!();
}

/// Render a settled failure to stderr, with a setup hint where it helps.
fn show_failure(error: &ArchitectError) {
    let err_style = Style::new().for_stderr().red();
    let dim = Style::new().for_stderr().dim();

    eprintln!();
    eprintln!("  {} {error}", err_style.apply_to("✗"));
    if matches!(error, ArchitectError::Configuration(_)) {
        eprintln!(
            "  {}",
            dim.apply_to("Generate a key in Google AI Studio, then re-run setup.")
        );
    }
    eprintln!();
}

/// What to do after a successful generation.
enum AfterSuccess {
    ComposeAnother,
    StartOver,
    Done,
}

/// Post-success action menu. Export actions print to stdout so the prompt
/// can be piped or copied; everything else stays on stderr.
fn result_menu(
    theme: &dialoguer::theme::ColorfulTheme,
    config: &Config,
    session: &Session,
) -> anyhow::Result<AfterSuccess> {
    let dim = Style::new().for_stderr().dim();
    let items = &[
        "Print prompt to stdout",
        "Print Midjourney format to stdout",
        "Compose another",
        "Reset and start over",
        "Back to menu",
    ];

    loop {
        let selection = Select::with_theme(theme)
            .with_prompt("Next")
            .items(items)
            .default(0)
            .interact_opt()?;

        let Some(prompt) = session.result().map(|b| b.optimized_prompt.as_str()) else {
            return Ok(AfterSuccess::Done);
        };

        match selection {
            Some(0) => {
                println!(
                    "{}",
                    render_export(ExportFormat::Plain, &config.export, prompt)
                );
                eprintln!("  {}", dim.apply_to("Prompt printed to stdout."));
            }
            Some(1) => {
                println!(
                    "{}",
                    render_export(ExportFormat::Midjourney, &config.export, prompt)
                );
                eprintln!("  {}", dim.apply_to("Midjourney command printed to stdout."));
            }
            Some(2) => return Ok(AfterSuccess::ComposeAnother),
            Some(3) => return Ok(AfterSuccess::StartOver),
            Some(4) | None => return Ok(AfterSuccess::Done),
            _ => unreachable!(),
        }
    }
}
