//! body-highlighter CLI - render anatomical diagrams to SVG.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use body_highlighter::state::MouseEvent;
use body_highlighter::{
    BodyConfig, BodyPartData, BodyPartSlug, Border, Gender, Selection, Side, asset_table,
};

/// Render interactive anatomical body diagrams as SVG
#[derive(Parser)]
#[command(name = "body-highlighter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a diagram to SVG
    Render {
        /// JSON config file (flags override its values)
        #[arg(short, long, env = "BODY_CONFIG")]
        config: Option<PathBuf>,

        /// male or female
        #[arg(short, long)]
        gender: Option<Gender>,

        /// front or back
        #[arg(short, long)]
        side: Option<Side>,

        /// Multiplier on the 200x400 base size
        #[arg(long)]
        scale: Option<f64>,

        /// Outline color, or "none"
        #[arg(long)]
        border: Option<String>,

        /// Fill for regions without a highlight
        #[arg(long)]
        default_fill: Option<String>,

        /// Highlight a region, as slug=color (repeatable)
        #[arg(long = "highlight", value_name = "SLUG=COLOR")]
        highlights: Vec<BodyPartData>,

        /// Disable a region (repeatable)
        #[arg(long = "disable", value_name = "SLUG")]
        disabled: Vec<BodyPartSlug>,

        /// Hide a region (repeatable)
        #[arg(long = "hide", value_name = "SLUG")]
        hidden: Vec<BodyPartSlug>,

        /// Toggle a region as if clicked, in order (repeatable)
        #[arg(long = "click", value_name = "SLUG")]
        clicks: Vec<BodyPartSlug>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List body part slugs
    Slugs {
        /// Only slugs drawn for this gender (requires --side)
        #[arg(short, long, requires = "side")]
        gender: Option<Gender>,

        /// Only slugs drawn for this side (requires --gender)
        #[arg(short, long, requires = "gender")]
        side: Option<Side>,
    },
}

#[derive(Default)]
struct RenderArgs {
    config: Option<PathBuf>,
    gender: Option<Gender>,
    side: Option<Side>,
    scale: Option<f64>,
    border: Option<String>,
    default_fill: Option<String>,
    highlights: Vec<BodyPartData>,
    disabled: Vec<BodyPartSlug>,
    hidden: Vec<BodyPartSlug>,
    clicks: Vec<BodyPartSlug>,
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "body_highlighter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            config,
            gender,
            side,
            scale,
            border,
            default_fill,
            highlights,
            disabled,
            hidden,
            clicks,
            output,
        } => {
            cmd_render(RenderArgs {
                config,
                gender,
                side,
                scale,
                border,
                default_fill,
                highlights,
                disabled,
                hidden,
                clicks,
                output,
            })?;
        }
        Commands::Slugs { gender, side } => {
            cmd_slugs(gender, side)?;
        }
    }

    Ok(())
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => BodyConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BodyConfig::default(),
    };

    apply_overrides(&mut config, &args);
    config.validate().context("Invalid options")?;
    replay_clicks(&mut config, &args.clicks);

    let svg = config.render(None).to_svg().context("Failed to write SVG")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &svg).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = svg.len(), "wrote diagram");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

/// Flags win over the config file; list flags append to the file's lists.
fn apply_overrides(config: &mut BodyConfig, args: &RenderArgs) {
    if let Some(gender) = args.gender {
        config.gender = gender;
    }
    if let Some(side) = args.side {
        config.side = side;
    }
    if let Some(scale) = args.scale {
        config.scale = scale;
    }
    if let Some(border) = &args.border {
        config.border = Border::from(border.as_str());
    }
    if let Some(fill) = &args.default_fill {
        config.default_fill = fill.clone();
    }
    config.data.extend(args.highlights.iter().cloned());
    config.disabled_parts.extend(args.disabled.iter().copied());
    config.hidden_parts.extend(args.hidden.iter().copied());
}

/// Toggle each clicked slug through the same activation path a host uses.
/// Slugs that are hidden, disabled or not drawn in this view are skipped.
fn replay_clicks(config: &mut BodyConfig, clicks: &[BodyPartSlug]) {
    if clicks.is_empty() {
        return;
    }

    let selection = Selection::with_data(std::mem::take(&mut config.data));
    let diagram = config.render(Some(selection.click_handler()));
    for slug in clicks {
        let Some((index, _)) = diagram.shapes_for(*slug).next() else {
            tracing::warn!(slug = slug.as_str(), "not drawn in this view, click ignored");
            continue;
        };
        if !diagram.click(index, MouseEvent::click(0.0, 0.0)) {
            tracing::warn!(slug = slug.as_str(), "region is disabled, click ignored");
        }
    }
    config.data = selection.data();
}

fn cmd_slugs(gender: Option<Gender>, side: Option<Side>) -> Result<()> {
    let slugs: Vec<BodyPartSlug> = match (gender, side) {
        (Some(gender), Some(side)) => asset_table(gender, side).slugs().collect(),
        (None, None) => BodyPartSlug::ALL.to_vec(),
        _ => bail!("--gender and --side must be given together"),
    };

    let mut stdout = std::io::stdout().lock();
    for slug in slugs {
        writeln!(stdout, "{}", slug)?;
    }
    Ok(())
}
