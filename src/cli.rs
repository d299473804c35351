use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Termo - delivery-term form tool
#[derive(Parser, Debug)]
#[command(name = "termo")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'termo' without arguments to fill the form interactively.")]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a termo.toml config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the delivery date from a start date and business-day count
    Deadline {
        /// Start date (YYYY-MM-DD or DD/MM/YYYY); defaults to today
        #[arg(short, long)]
        start: Option<String>,

        /// Business days to advance; defaults to the configured deadline
        #[arg(short, long)]
        days: Option<i64>,
    },

    /// Validate the form and render the printable delivery term
    Generate {
        #[command(flatten)]
        fields: TermFields,

        /// Ignore the persisted last term
        #[arg(long)]
        fresh: bool,

        /// Directory for the rendered document
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Check the form fields without rendering
    Validate {
        #[command(flatten)]
        fields: TermFields,

        /// Ignore the persisted last term
        #[arg(long)]
        fresh: bool,
    },
}

/// Form fields; anything omitted falls back to the persisted last term.
#[derive(Args, Debug, Default)]
pub struct TermFields {
    /// Store key (carrao, perdizes, or one from termo.toml)
    #[arg(long)]
    pub store: Option<String>,

    /// Customer full name
    #[arg(long)]
    pub name: Option<String>,

    /// Contract number
    #[arg(long)]
    pub contract: Option<String>,

    /// RG (identity card number)
    #[arg(long)]
    pub rg: Option<String>,

    /// CPF (taxpayer id)
    #[arg(long)]
    pub cpf: Option<String>,

    /// Signature date (YYYY-MM-DD or DD/MM/YYYY); defaults to today
    #[arg(long)]
    pub signature: Option<String>,

    /// Deadline in business days (the form's "prazo")
    #[arg(long)]
    pub days: Option<i64>,

    /// Hydraulic plan delivered (true/false)
    #[arg(long)]
    pub hydraulic: Option<bool>,

    /// Electric plan delivered (true/false)
    #[arg(long)]
    pub electric: Option<bool>,
}
