use std::path::PathBuf;

use android_i18n::{Result, export, import, output};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Import(args) => {
            let trees = import::import(&args.source, &args.default_locale)?;
            let written = output::write_resources(&trees, &args.project_dir)?;
            info!(files = written.len(), "import finished");
            Ok(())
        }
        Command::Export(args) => {
            let trees = export::export(&args.project_dir, &args.default_locale)?;
            let sheet = export::to_sheet(&trees);
            export::write_sheet(&sheet, &args.output)?;
            info!(output = %args.output.display(), "export finished");
            Ok(())
        }
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Import and export Android i18n string resources."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate values[-XX]/strings.xml files from a spreadsheet.
    Import(ImportArgs),
    /// Collect strings.xml files back into a spreadsheet for translators.
    Export(ExportArgs),
}

#[derive(clap::Args)]
struct ImportArgs {
    /// Source spreadsheet (.xls or .csv).
    #[arg(long)]
    source: PathBuf,

    /// Android project directory containing src/main/res.
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Locale written to the unsuffixed values/ directory.
    #[arg(long, default_value = "en")]
    default_locale: String,
}

#[derive(clap::Args)]
struct ExportArgs {
    /// Android project directory containing src/main/res.
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Output spreadsheet path (.csv).
    #[arg(long)]
    output: PathBuf,

    /// Locale assigned to the unsuffixed values/ directory.
    #[arg(long, default_value = "en")]
    default_locale: String,
}
