use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "listatron")]
#[command(about = "Ordena exportes de inventario y llena formularios de reserva", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort an inventory export CSV into data_sorted.xlsx
    Sort {
        /// Export CSV file
        #[arg(required = true)]
        input: PathBuf,

        /// Output directory or .xlsx path (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fill reservation forms from a client list
    Forms {
        /// Client list (.xlsx)
        #[arg(required = true)]
        clients: PathBuf,

        /// Form template (.xlsx)
        #[arg(required = true)]
        template: PathBuf,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip all_forms.zip
        #[arg(long)]
        no_zip: bool,

        /// Skip the individual filled_<n>.xlsx files when a zip is written
        #[arg(long)]
        no_files: bool,
    },

    /// Show or edit settings
    Config {
        /// Show current settings
        #[arg(long)]
        show: bool,

        /// Template sheet holding the ten forms
        #[arg(long)]
        template_sheet: Option<String>,

        /// Client list sheet (default: first sheet)
        #[arg(long)]
        client_sheet: Option<String>,
    },
}
