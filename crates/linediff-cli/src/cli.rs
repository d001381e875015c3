use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use linediff_render::ViewMode;

#[derive(Parser)]
#[command(
    name = "linediff",
    about = "Compare two texts line by line",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Disable ANSI colors in text output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    #[default]
    Inline,
    SideBySide,
}

impl From<View> for ViewMode {
    fn from(view: View) -> Self {
        match view {
            View::Inline => ViewMode::Inline,
            View::SideBySide => ViewMode::SideBySide,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two files (or two literal texts with --literal)
    Diff(DiffArgs),
    /// Compare two single lines character by character
    Chars(CharsArgs),
    /// Compare the built-in sample texts
    Example(ExampleArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct CompareArgs {
    /// Compare lowercased text
    #[arg(short = 'i', long)]
    pub ignore_case: bool,
    /// Collapse whitespace runs and trim each line before comparing
    #[arg(short = 'w', long)]
    pub ignore_whitespace: bool,
    #[arg(long, value_enum, default_value = "inline")]
    pub view: View,
    #[command(flatten)]
    pub limits: LimitArgs,
}

/// Engine config file and size limit overrides, shared by every command
/// that builds an LCS table.
#[derive(Args, Clone, Debug, Default)]
pub struct LimitArgs {
    /// TOML engine configuration
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Refuse inputs whose LCS table exceeds this many cells (0 = no limit)
    #[arg(long, conflicts_with = "no_limit")]
    pub max_cells: Option<u64>,
    /// Disable the input size limit
    #[arg(long)]
    pub no_limit: bool,
}

#[derive(Args)]
pub struct DiffArgs {
    pub left: String,
    pub right: String,
    /// Treat LEFT and RIGHT as text instead of file paths; `\n` becomes a newline
    #[arg(long)]
    pub literal: bool,
    #[command(flatten)]
    pub compare: CompareArgs,
}

#[derive(Args)]
pub struct CharsArgs {
    pub left: String,
    pub right: String,
    #[arg(short = 'i', long)]
    pub ignore_case: bool,
    #[command(flatten)]
    pub limits: LimitArgs,
}

#[derive(Args)]
pub struct ExampleArgs {
    #[command(flatten)]
    pub compare: CompareArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_diff_flags() {
        let cli = Cli::try_parse_from([
            "linediff", "diff", "a.txt", "b.txt", "-i", "-w", "--view", "side-by-side",
            "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Command::Diff(args) => {
                assert_eq!(args.left, "a.txt");
                assert!(!args.literal);
                assert!(args.compare.ignore_case);
                assert!(args.compare.ignore_whitespace);
                assert_eq!(args.compare.view, View::SideBySide);
            }
            _ => panic!("expected diff command"),
        }
    }

    #[test]
    fn limit_flags_conflict() {
        let result = Cli::try_parse_from([
            "linediff", "diff", "a", "b", "--max-cells", "10", "--no-limit",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_chars() {
        let cli = Cli::try_parse_from([
            "linediff", "chars", "cat", "cut", "-i", "--max-cells", "16",
        ])
        .unwrap();
        match cli.command {
            Command::Chars(args) => {
                assert_eq!((args.left.as_str(), args.right.as_str()), ("cat", "cut"));
                assert!(args.ignore_case);
                assert_eq!(args.limits.max_cells, Some(16));
            }
            _ => panic!("expected chars command"),
        }

        let result = Cli::try_parse_from([
            "linediff", "chars", "a", "b", "--max-cells", "10", "--no-limit",
        ]);
        assert!(result.is_err());
    }
}
