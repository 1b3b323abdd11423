//! The `architect generate` command: one idea or media file in, one
//! blueprint out.
//!
//! Analysis and pro tip are commentary and go to stderr; the optimized
//! prompt (or the JSON blueprint with `--format json`) goes to stdout so the
//! useful part pipes cleanly into other tools.

use std::path::PathBuf;

use architect_core::media::load_attachment;
use architect_core::{
    render_export, Architect, ArchitectError, ArchitectResult, Category, Config, ExportFormat,
};
use clap::{Args, ValueEnum};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The idea to blueprint (used as context when media is attached)
    pub idea: Option<String>,

    /// Prompt category
    #[arg(short, long, value_enum, default_value_t = CategoryArg::Image)]
    pub category: CategoryArg,

    /// Attach an image or video file (switches to media analysis)
    #[arg(short, long)]
    pub media: Option<PathBuf>,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Rendering applied to the optimized prompt
    #[arg(short, long, value_enum, default_value_t = Export::Plain)]
    pub export: Export,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// User-selectable categories. Media analysis is not listed; attaching
/// media selects it automatically.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryArg {
    Image,
    Video,
    Seo,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Image => Category::Image,
            CategoryArg::Video => Category::Video,
            CategoryArg::Seo => Category::Seo,
        }
    }
}

/// What lands on stdout.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Commentary to stderr, optimized prompt to stdout
    Text,
    /// Full blueprint as pretty-printed JSON
    Json,
}

/// Export renderings for the optimized prompt.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Export {
    Plain,
    Midjourney,
}

impl From<Export> for ExportFormat {
    fn from(arg: Export) -> Self {
        match arg {
            Export::Plain => ExportFormat::Plain,
            Export::Midjourney => ExportFormat::Midjourney,
        }
    }
}

/// Execute the generate command.
pub async fn execute(args: GenerateArgs, config: &Config) -> anyhow::Result<()> {
    let media = match &args.media {
        Some(path) => {
            let expanded =
                PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            let attachment = load_attachment(&expanded, config.limits.max_media_size_mb)?;
            tracing::debug!(
                file = %attachment.file_name,
                mime = %attachment.mime_type,
                "Attached media"
            );
            Some(attachment)
        }
        None => None,
    };

    let category = if media.is_some() {
        Category::MediaAnalysis
    } else {
        args.category.into()
    };
    let idea = args.idea.unwrap_or_default();

    let engine = Architect::from_config(config);

    let spinner = create_spinner(&config.model.name);
    let result = engine.architect(category, &idea, media.as_ref()).await;
    spinner.finish_and_clear();

    let blueprint = result.map_err(friendly)?;

    match args.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&blueprint)?;
            emit(&args.output, &json)?;
        }
        Format::Text => {
            print_commentary(&blueprint);
            let prompt = render_export(
                args.export.into(),
                &config.export,
                &blueprint.optimized_prompt,
            );
            emit(&args.output, &prompt)?;
        }
    }

    Ok(())
}

/// Spinner shown on stderr while the request is in flight.
pub(crate) fn create_spinner(model: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Architecting via {model}..."));
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Print analysis and pro tip to stderr, leaving stdout for the prompt.
fn print_commentary(blueprint: &ArchitectResult) {
    let label = Style::new().for_stderr().cyan().bold();
    let dim = Style::new().for_stderr().dim();

    eprintln!();
    eprintln!("  {}", label.apply_to("Analysis"));
    for line in blueprint.analysis.lines() {
        eprintln!("    {line}");
    }
    eprintln!();
    eprintln!("  {}", label.apply_to("Pro tip"));
    for line in blueprint.pro_tip.lines() {
        eprintln!("    {line}");
    }
    eprintln!();
    eprintln!("  {}", dim.apply_to("Optimized prompt follows on stdout:"));
}

/// Write `content` to the output file, or print it to stdout.
fn emit(output: &Option<PathBuf>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))?;
            eprintln!("  Wrote result to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

/// Attach actionable hints to setup and input errors; pass the rest through.
fn friendly(err: ArchitectError) -> anyhow::Error {
    match err {
        ArchitectError::Configuration(msg) => anyhow::anyhow!(
            "{msg}\nGenerate a key in Google AI Studio, then export GEMINI_API_KEY \
             or set model.api_key in the config file (`architect config path`)."
        ),
        ArchitectError::Validation(msg) => anyhow::anyhow!(
            "{msg}\nFor example: architect generate \"a lighthouse at dusk\""
        ),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_flags_map_onto_core_categories() {
        assert_eq!(Category::from(CategoryArg::Image), Category::Image);
        assert_eq!(Category::from(CategoryArg::Video), Category::Video);
        assert_eq!(Category::from(CategoryArg::Seo), Category::Seo);
    }

    #[test]
    fn export_flags_map_onto_core_formats() {
        assert_eq!(ExportFormat::from(Export::Plain), ExportFormat::Plain);
        assert_eq!(
            ExportFormat::from(Export::Midjourney),
            ExportFormat::Midjourney
        );
    }

    #[test]
    fn emit_writes_to_file_when_output_is_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.txt");
        emit(&Some(path.clone()), "a lighthouse at dusk").unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "a lighthouse at dusk\n");
    }

    #[test]
    fn configuration_errors_carry_a_setup_hint() {
        let err = friendly(ArchitectError::Configuration("set the key".to_string()));
        let text = format!("{err}");
        assert!(text.contains("GEMINI_API_KEY"));
        assert!(text.contains("config"));
    }

    #[test]
    fn transport_errors_pass_through_verbatim() {
        let err = friendly(ArchitectError::Transport {
            message: "Gemini HTTP 500: boom".to_string(),
            status_code: Some(500),
        });
        assert!(format!("{err}").contains("Gemini HTTP 500: boom"));
    }
}
