use std::fs;

use anyhow::Context;
use colored::Colorize;
use linediff_core::{DiffEngine, DiffOptions, EngineConfig};
use linediff_render::{
    char_diff_json, emphasis_segments, side_by_side_table, to_html, to_terminal, Cell, DiffReport,
    RowKind, Segment, SideBySideRow, TerminalRenderer,
};
use tracing::debug;

use crate::cli::*;

const SAMPLE_LEFT: &str = "This is the first sample text.
It contains some lines that are the same.
This line will be removed in the second text.
Both texts share this line without changes.
Here is another line that will be modified.";

const SAMPLE_RIGHT: &str = "This is the first sample text.
It contains some lines that are the same.
Both texts share this line without changes.
Here is another line that has been modified slightly.
This is a completely new line added to the second text.";

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let output = Output {
        format: cli.format,
        color: !cli.no_color,
    };
    let rendered = match cli.command {
        Command::Diff(args) => cmd_diff(args, output)?,
        Command::Chars(args) => cmd_chars(args, output)?,
        Command::Example(args) => compare(SAMPLE_LEFT, SAMPLE_RIGHT, &args.compare, output)?,
    };
    print!("{rendered}");
    Ok(())
}

#[derive(Clone, Copy, Debug)]
struct Output {
    format: OutputFormat,
    color: bool,
}

fn cmd_diff(args: DiffArgs, output: Output) -> anyhow::Result<String> {
    let (left, right) = if args.literal {
        (unescape_newlines(&args.left), unescape_newlines(&args.right))
    } else {
        (read_input(&args.left)?, read_input(&args.right)?)
    };
    compare(&left, &right, &args.compare, output)
}

fn cmd_chars(args: CharsArgs, output: Output) -> anyhow::Result<String> {
    let engine = DiffEngine::new(engine_config(&args.limits, args.ignore_case, false)?);
    let entries = engine.char_diff(&args.left, &args.right)?;
    let (left, right) = emphasis_segments(&entries, &args.right);

    Ok(match output.format {
        OutputFormat::Json => format!("{}\n", char_diff_json(&entries)?),
        OutputFormat::Html => side_by_side_table(&[SideBySideRow {
            kind: RowKind::Unchanged,
            left: Some(Cell { line: 1, segments: left }),
            right: Some(Cell { line: 1, segments: right }),
        }]),
        OutputFormat::Text => {
            let (minus, plus) = if output.color {
                ("-".red().to_string(), "+".green().to_string())
            } else {
                ("-".to_string(), "+".to_string())
            };
            format!(
                "{minus} {}\n{plus} {}\n",
                paint_chars(&left, RowKind::Removed, output.color),
                paint_chars(&right, RowKind::Added, output.color)
            )
        }
    })
}

/// Run a bounded line diff and render it in the requested format.
fn compare(
    left: &str,
    right: &str,
    args: &CompareArgs,
    output: Output,
) -> anyhow::Result<String> {
    let config = engine_config(&args.limits, args.ignore_case, args.ignore_whitespace)?;
    let engine = DiffEngine::new(config);
    let script = engine.line_diff(left, right)?;
    let pairs = engine.changed_pairs(&script, left, right)?;

    Ok(match output.format {
        OutputFormat::Json => {
            format!("{}\n", DiffReport::new(&script, engine.options(), &pairs).to_json()?)
        }
        OutputFormat::Html => to_html(&script, left, right, &pairs, args.view.into()),
        OutputFormat::Text => to_terminal(
            &script,
            left,
            right,
            &pairs,
            args.view.into(),
            TerminalRenderer::new(output.color),
        ),
    })
}

/// File config first, then command-line flags on top.
fn engine_config(
    limits: &LimitArgs,
    ignore_case: bool,
    ignore_whitespace: bool,
) -> anyhow::Result<EngineConfig> {
    let mut config = match &limits.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let file_options = config.options;
    config.options = DiffOptions {
        ignore_case: file_options.ignore_case || ignore_case,
        ignore_whitespace: file_options.ignore_whitespace || ignore_whitespace,
    };
    if let Some(max_cells) = limits.max_cells {
        config.max_cells = max_cells;
    }
    if limits.no_limit {
        config.max_cells = 0;
    }
    debug!(?config, "engine config");
    Ok(config)
}

fn read_input(path: &str) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}

fn unescape_newlines(s: &str) -> String {
    s.replace("\\n", "\n")
}

fn paint_chars(segments: &[Segment], kind: RowKind, color: bool) -> String {
    segments
        .iter()
        .map(|s| match (color, s.emphasized, kind) {
            (true, true, RowKind::Removed) => s.text.on_red().bold().to_string(),
            (true, true, _) => s.text.on_green().bold().to_string(),
            (false, true, RowKind::Removed) => format!("[-{}-]", s.text),
            (false, true, _) => format!("{{+{}+}}", s.text),
            (_, false, _) => s.text.clone(),
        })
        .collect()
}
