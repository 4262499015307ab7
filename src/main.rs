use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use seqdiff::artifacts::core::fold;
use seqdiff::artifacts::differ::{DiffOptions, DifferKind};
use seqdiff::artifacts::matcher::DEFAULT_CONTEXT_SIZE;
use seqdiff::artifacts::writer::{ColorMode, ColorPalette, ConsoleDiffWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "seqdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two text files line by line",
    long_about = "This command compares two text files line by line and prints their differences. \
    Edited lines are aligned character by character, either with `?` tag lines (readable), \
    with highlighted characters (colorize) or as unified diff hunks (unified). \
    The exit status is 0 when the files are identical and 1 when they differ.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    from: PathBuf,
    #[arg(index = 2, help = "The changed file")]
    to: PathBuf,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = DifferKind::Readable,
        help = "The diff format to print"
    )]
    format: DifferKind,
    #[arg(
        short = 'U',
        long,
        default_value_t = DEFAULT_CONTEXT_SIZE,
        help = "Lines of context around each unified hunk"
    )]
    context: usize,
    #[arg(long, help = "Label of the original file in unified headers (defaults to its path)")]
    from_label: Option<String>,
    #[arg(long, help = "Label of the changed file in unified headers (defaults to its path)")]
    to_label: Option<String>,
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, help = "When to colorize the output")]
    color: ColorMode,
    #[arg(
        long,
        env = "SEQDIFF_COLORS",
        help = "Color overrides, e.g. `deleted=white/red:summary=magenta`"
    )]
    colors: Option<String>,
    #[arg(long, help = "Wrap long lines of both files before comparing them")]
    fold: bool,
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut from = read_text(&cli.from)?;
    let mut to = read_text(&cli.to)?;
    if cli.fold {
        from = fold(&from);
        to = fold(&to);
    }

    let palette = match &cli.colors {
        Some(spec) => ColorPalette::parse(spec).context("invalid color overrides")?,
        None => ColorPalette::default(),
    };
    let options = DiffOptions {
        context_size: cli.context,
        from_label: cli
            .from_label
            .unwrap_or_else(|| cli.from.display().to_string()),
        to_label: cli.to_label.unwrap_or_else(|| cli.to.display().to_string()),
    };

    let differ = cli.format.build(&from, &to, &options);
    if !differ.needs_diff() {
        debug!("{} and {} are identical", cli.from.display(), cli.to.display());
        return Ok(ExitCode::SUCCESS);
    }

    let mut writer = ConsoleDiffWriter::stdout(cli.color).with_palette(palette);
    differ.diff(&mut writer);
    writer.into_inner().context("failed to write diff")?;

    Ok(ExitCode::FAILURE)
}
