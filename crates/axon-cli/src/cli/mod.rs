//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use axon_core::options::ForceMode;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "axon",
    bin_name = "axon",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Interactive axon package scaffolding",
    long_about = "Axon walks you through creating an axon.json and the \
                  basic scaffold for a new package.",
    after_help = "EXAMPLES:\n\
        \x20 axon init\n\
        \x20 axon init my-module --template neuron\n\
        \x20 axon init --force skip\n\
        \x20 axon completions bash > /usr/share/bash-completion/completions/axon",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a package in a directory.
    #[command(
        visible_alias = "i",
        about = "Scaffold a package interactively",
        after_help = "EXAMPLES:\n\
            \x20 axon init                       # current directory\n\
            \x20 axon init my-module             # ./my-module\n\
            \x20 axon init --template neuron\n\
            \x20 axon init --force override      # skip the conflict prompt"
    )]
    Init(InitArgs),

    /// List available templates and licenses.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 axon list\n\
            \x20 axon list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 axon completions bash > ~/.local/share/bash-completion/completions/axon\n\
            \x20 axon completions zsh  > ~/.zfunc/_axon\n\
            \x20 axon completions fish > ~/.config/fish/completions/axon.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `axon init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize.  Created by the generation engine if it
    /// does not exist yet; defaults to the current directory.
    #[arg(value_name = "DIR", default_value = ".", help = "Directory to initialize")]
    pub cwd: PathBuf,

    /// Template to scaffold from, bypassing the template prompt.
    #[arg(
        short = 't',
        long = "template",
        value_name = "NAME",
        help = "Template to use (skips the template prompt)"
    )]
    pub template: Option<String>,

    /// Conflict strategy for a non-empty directory, bypassing the
    /// conflict prompt.  Metadata collection and confirmation still run.
    #[arg(
        short = 'f',
        long = "force",
        value_name = "MODE",
        value_enum,
        help = "Conflict strategy for a non-empty directory"
    )]
    pub force: Option<ForceArg>,
}

/// Conflict strategies accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ForceArg {
    /// Overwrite existing files.
    Override,
    /// Keep existing files, only write missing ones.
    Skip,
}

impl From<ForceArg> for ForceMode {
    fn from(arg: ForceArg) -> Self {
        match arg {
            ForceArg::Override => ForceMode::Overriding,
            ForceArg::Skip => ForceMode::Skipping,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `axon list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON object.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `axon completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
