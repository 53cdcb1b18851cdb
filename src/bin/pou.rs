//! Command-line front end for the PoU request ledger

use anyhow::{Context, bail};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use pou::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "pou.yaml";

#[derive(Parser, Debug)]
#[command(
    name = "pou",
    version,
    about = "Point-of-Use parts requests and stockroom fulfillment",
    arg_required_else_help = true
)]
struct Cli {
    /// YAML config file (default: ./pou.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ledger data path, overrides `storage.path`.
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Log more (repeat for debug).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a new parts request.
    #[command(alias = "new")]
    Add {
        #[arg(long)]
        employee: String,

        #[arg(long)]
        job: String,

        /// Date pulled, YYYY-MM-DD or `today`.
        #[arg(long, default_value = "today")]
        date: String,

        #[arg(long, default_value = "")]
        notes: String,

        /// Part and quantity as PART=QTY (repeatable).
        #[arg(long = "part", value_name = "PART=QTY", required = true)]
        parts: Vec<String>,
    },

    /// Close out a request (stockroom).
    Fulfill {
        /// Request number as shown by `list`.
        number: usize,

        #[arg(long)]
        initials: String,

        #[arg(long, default_value = "")]
        inventory: String,

        #[arg(long, default_value = "")]
        adjust: String,
    },

    /// Show the records table.
    #[command(alias = "ls")]
    List,

    /// Show open/fulfilled counts.
    Stats,

    /// Show the detail block of one request.
    Show { number: usize },

    /// List requests as selectable options.
    Options,

    /// Write the ledger to a CSV or TXT file.
    Export {
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file (default: configured directory and file name).
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Autocomplete employee names or part numbers.
    Suggest {
        #[arg(value_enum)]
        kind: SuggestKind,

        #[arg(default_value = "")]
        query: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExportFormat {
    Csv,
    Txt,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SuggestKind {
    Employee,
    Part,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<PouConfig> {
    let mut config = match &cli.config {
        Some(path) => PouConfig::from_yaml_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            PouConfig::from_yaml_file(DEFAULT_CONFIG_FILE)?
        }
        None => PouConfig::default(),
    };
    if let Some(data) = &cli.data {
        config.storage.path = data.clone();
    }
    Ok(config)
}

/// Table numbers are 1-based
fn to_index(number: usize) -> anyhow::Result<usize> {
    number
        .checked_sub(1)
        .context("request numbers start at 1")
}

fn parse_part(arg: &str) -> anyhow::Result<(&str, &str)> {
    match arg.split_once('=') {
        Some(pair) => Ok(pair),
        None => bail!("invalid part '{}', expected PART=QTY", arg),
    }
}

fn print_table(rows: &[TableRow]) {
    println!(
        "#  | Employee | Job | Parts | Date Pulled | Time Requested | Notes | Inventory | Adjust | Initials | Status | Fulfilled Time"
    );
    for row in rows {
        println!(
            "{} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {}",
            row.number,
            row.employee,
            row.job,
            row.parts,
            row.date_pulled,
            row.time_requested,
            row.notes,
            row.inventory_count,
            row.adjust_count,
            row.stockroom_initials,
            row.status,
            row.fulfilled_time
        );
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let store = open_record_store(&config.storage)?;
    let mut ledger = Ledger::open(store)?;

    match cli.command {
        Commands::Add {
            employee,
            job,
            date,
            notes,
            parts,
        } => {
            let mut pending = PendingParts::new();
            for arg in &parts {
                let (part_number, quantity) = parse_part(arg)?;
                pending.add_part(part_number, quantity)?;
            }
            let date = if date.eq_ignore_ascii_case("today") {
                ledger.today()
            } else {
                date
            };

            let input = NewRequest::new(employee, job, date).with_notes(notes);
            let label = ledger.submit(input, &mut pending)?.label();
            println!("Created request #{}: {}", ledger.len(), label);
        }

        Commands::Fulfill {
            number,
            initials,
            inventory,
            adjust,
        } => {
            let input = Fulfillment::new(initials)
                .with_inventory_count(inventory)
                .with_adjust_count(adjust);
            let record = ledger.fulfill(to_index(number)?, input)?;
            println!(
                "Fulfilled request #{}: {} ({})",
                number,
                record.label(),
                record.fulfilled_time
            );
        }

        Commands::List => print_table(&ledger.table_rows()),

        Commands::Stats => println!("{}", ledger.stats()),

        Commands::Show { number } => match ledger.summary_text(Some(to_index(number)?)) {
            Some(summary) => println!("{}", summary),
            None => bail!("no request #{}", number),
        },

        Commands::Options => {
            for option in ledger.selectable_list() {
                println!("{}\t{}", option.index + 1, option.label);
            }
        }

        Commands::Export { format, out } => {
            let exporter: Box<dyn Exporter> = match format {
                ExportFormat::Csv => Box::new(config.export.csv_exporter()),
                ExportFormat::Txt => Box::new(config.export.txt_exporter()),
            };
            let rows = ledger.export_rows();
            let path = match out {
                Some(path) => write_export_to(exporter.as_ref(), &rows, &path)?,
                None => write_export(exporter.as_ref(), &rows, &config.export.directory)?,
            };
            println!("Exported {} records to {}", rows.len(), path.display());
        }

        Commands::Suggest { kind, query } => {
            let mut catalog = config.catalog.clone();
            catalog.absorb_records(ledger.records());
            let kind = match kind {
                SuggestKind::Employee => CatalogKind::Employee,
                SuggestKind::Part => CatalogKind::Part,
            };
            for entry in catalog.suggest(kind, &query) {
                println!("{}", entry);
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PouError>() {
                Some(err) => eprintln!("{}: {}", err.error_code(), err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}
