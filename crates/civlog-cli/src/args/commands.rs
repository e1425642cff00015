use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the flight records of an export, then any rejected rows")]
    Show {
        #[arg(help = "SACI export (.csv or .xlt)")]
        file: PathBuf,
    },

    #[command(about = "Close consecutive pages from the front of an export and print their totals")]
    Totals {
        #[arg(help = "SACI export (.csv or .xlt)")]
        file: PathBuf,

        #[arg(
            long,
            value_delimiter = ',',
            required = true,
            help = "Record count of each page, in order (e.g. 10,10,8)"
        )]
        pages: Vec<usize>,

        #[arg(
            long,
            help = "Rebuild page 1 as records 1..=ROW before closing the other pages"
        )]
        start_here: Option<usize>,
    },

    #[command(about = "Write the flight records of an export as CSV")]
    Export {
        #[arg(help = "SACI export (.csv or .xlt)")]
        file: PathBuf,

        #[arg(short, long, help = "Output file (default: stdout)")]
        output: Option<PathBuf>,
    },

    #[command(about = "Close logbook pages interactively")]
    Close {
        #[arg(help = "SACI export (.csv or .xlt)")]
        file: PathBuf,
    },
}
