use clap::{Parser, Subcommand};
use colored::Colorize;
use sheetcmp::cli;
use sheetcmp::error::SheetResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheetcmp")]
#[command(about = "Compare a new and an old product sheet by product ID.")]
#[command(long_about = "sheetcmp - Product Sheet Comparator

Column A (the first column) holds the product ID used for comparison.

COMMANDS:
  compare   - Report products to add, delete and re-price; export the new
              sheet with '=L2.url' / '=M2.url' formulas in columns N/O
  layout    - Print the effective column layout as YAML

EXAMPLES:
  sheetcmp compare new.csv old.csv
  sheetcmp compare new.csv old.csv -o catalog.csv --report diff.xlsx
  sheetcmp layout > layout.yaml")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Compare two product sheets.

Upload the most recent product table as NEW and the current catalog as OLD.
Rows with an empty product ID are ignored.

RESULTS:
  Add           - products in NEW but not in OLD
  Delete        - products in OLD but not in NEW
  Price change  - products in both whose price text differs
                  (only when both sheets have a column containing 'price')
  Output table  - NEW with formulas in columns N/O (positions 14/15), or
                  appended as trailing N/O columns when NEW has fewer than
                  15 columns

The output table is written to output_with_formulas.csv unless -o is given.
An -o path ending in .xlsx writes a workbook with every result instead.")]
    /// Compare a new product sheet against the old one
    Compare {
        /// New product table (CSV)
        new: PathBuf,

        /// Old product table (CSV)
        old: PathBuf,

        /// Output table path (.csv, or .xlsx for a full workbook)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write an Excel report with every result
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// YAML file overriding the column layout
        #[arg(short, long, env = "SHEETCMP_LAYOUT")]
        layout: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the effective column layout as YAML
    Layout {
        /// YAML file overriding the column layout
        #[arg(short, long, env = "SHEETCMP_LAYOUT")]
        layout: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "sheetcmp=debug" } else { "sheetcmp=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "❌ Error:".bold().red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> SheetResult<()> {
    match cli.command {
        Commands::Compare {
            new,
            old,
            output,
            report,
            layout,
            verbose,
        } => {
            init_tracing(verbose);
            cli::compare(new, old, output, report, layout, verbose)
        }

        Commands::Layout { layout } => {
            init_tracing(false);
            cli::show_layout(layout)
        }
    }
}
