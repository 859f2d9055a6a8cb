use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

pub use crate::cli_ops::*;

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightCyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::BrightMagenta.on_default())
}

pub fn styled_command() -> clap::Command {
    Cli::command()
}

#[derive(Debug, Parser)]
#[command(name = "daybook")]
#[command(bin_name = "daybook")]
#[command(version)]
#[command(about = "A daily planner: tasks, health, goals and reflection, one day at a time")]
#[command(styles = cli_styles())]
pub struct Cli {
    #[arg(
        short = 'd',
        long,
        global = true,
        env = "DAYBOOK_DB_PATH",
        default_value = ".daybook/state.sqlite",
        help = "Path to the SQLite database holding day records."
    )]
    pub db: String,

    #[arg(
        short = 'c',
        long,
        global = true,
        env = "DAYBOOK_CONFIG",
        default_value = ".daybook/config.toml",
        help = "Path to the TOML config file."
    )]
    pub config: PathBuf,

    #[arg(
        short = 'D',
        long,
        global = true,
        env = "DAYBOOK_DATE",
        help = "Operate on this day (YYYY-MM-DD) instead of the cursor."
    )]
    pub date: Option<String>,

    #[arg(
        short = 'j',
        long,
        global = true,
        help = "Render machine-readable JSON."
    )]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Show the current day.")]
    Show,
    #[command(about = "Move the cursor forward by N days (default 1).")]
    Next(StepArgs),
    #[command(about = "Move the cursor back by N days (default 1).")]
    Prev(StepArgs),
    #[command(about = "Move the cursor to today.")]
    Today,
    #[command(about = "Move the cursor to a specific day.")]
    Goto(GotoArgs),
    #[command(about = "Edit the work section.")]
    Work(WorkArgs),
    #[command(about = "Edit the personal section.")]
    Personal(PersonalArgs),
    #[command(about = "Edit the health section.")]
    Health(HealthArgs),
    #[command(about = "Edit the daily reflection.")]
    Reflect(ReflectArgs),
    #[command(about = "Merge a raw JSON patch into the day.")]
    Patch(PatchArgs),
    #[command(about = "List stored days.")]
    Ls,
    #[command(about = "Write every stored day as one JSON blob.")]
    Export(ExportArgs),
    #[command(about = "Replace every stored day with a JSON blob.")]
    Import(ImportArgs),
    #[command(about = "Print shell completions.")]
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct StepArgs {
    #[arg(default_value_t = 1, help = "Number of days to move.")]
    pub days: u32,
}

#[derive(Debug, Args)]
pub struct GotoArgs {
    #[arg(help = "Target day as YYYY-MM-DD.")]
    pub date: String,
}

#[derive(Debug, Args)]
pub struct PatchArgs {
    #[arg(help = "JSON object merged into the day record.")]
    pub patch: String,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short = 'o', long, help = "Write to this file instead of stdout.")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    #[arg(help = "File holding an exported day-record blob.")]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
#[command(about = "Print shell completions.")]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate for. Detected from $SHELL if omitted.")]
    pub shell: Option<Shell>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
