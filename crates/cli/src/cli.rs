use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tasajako_core::Category;

#[derive(Debug, Parser)]
#[command(name = "tasajako", version, about = "Split a shared receipt between two people")]
pub struct Cli {
    /// Config file (defaults to ./tasajako.toml when present).
    #[arg(long, global = true, env = "TASAJAKO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract line items from OCR or PDF text. Use `-` to read stdin.
    Parse {
        input: PathBuf,
        /// Print the full scan (raw text, winning pass) instead of just the items.
        #[arg(long)]
        report: bool,
    },
    /// Pair parsed items with category decisions, in order.
    Assign {
        /// JSON array of line items, as printed by `parse`.
        items: PathBuf,
        /// One of me, you, common (or shared), ignore per item.
        #[arg(required = true, value_delimiter = ',')]
        categories: Vec<Category>,
    },
    /// Compute per-category totals and owed amounts as JSON.
    Split {
        /// JSON array of categorized items, as printed by `assign`.
        input: PathBuf,
    },
    /// Print the plain-text settlement summary.
    Summary {
        input: PathBuf,
    },
    /// List the receipt dialects the parser will use.
    Dialects,
}
