use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use refmark_core::Style;

#[derive(Parser)]
#[command(name = "refmark")]
#[command(about = "Personal bibliography manager and citation rewriter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Library file (JSON lines); overrides the config file
    #[arg(long)]
    pub library: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Parse a citation and add it to the library")]
    Add {
        /// Free-form citation text
        text: String,
    },

    #[command(about = "Add an empty record for manual editing")]
    New,

    #[command(about = "List all records")]
    List {
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },

    #[command(about = "Show one record as JSON")]
    Show { id: String },

    #[command(about = "Update fields of an existing record")]
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// Author list, e.g. "Smith, J.; Doe, A."
        #[arg(long)]
        authors: Option<String>,

        #[arg(long)]
        journal: Option<String>,

        #[arg(long)]
        volume: Option<String>,

        #[arg(long)]
        issue: Option<String>,

        /// Page range, e.g. "101-145"
        #[arg(long)]
        pages: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        doi: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        raw_text: Option<String>,
    },

    #[command(about = "Delete a record (attachments are left on disk)")]
    Delete { id: String },

    #[command(about = "Attach file references to a record")]
    Attach {
        id: String,

        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    #[command(about = "Rewrite [id:...] placeholders in a document")]
    Process {
        /// Input document (plain text)
        path: PathBuf,

        /// Citation style: apa7, gbt, or ieee; defaults to the configured one
        #[arg(long, value_parser = parse_style)]
        style: Option<Style>,

        /// Output path; defaults to <input>_output_<style> next to the input
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn parse_style(s: &str) -> Result<Style, String> {
    Style::from_name(s).ok_or_else(|| format!("unknown style: {} (try apa7, gbt, or ieee)", s))
}
