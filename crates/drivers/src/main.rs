mod config;
mod logging;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use config::AppConfig;
use lite_label_adapters::{open_filesystem_service, present_label_row};
use lite_label_application::{ApplicationService, ListLabelsCommand};
use lite_label_domain::LabelRecord;
use tracing::error;

/// Page through a folder of images and write a one-line label per image.
#[derive(Debug, Parser)]
#[command(name = "lite-label", version)]
struct Cli {
    /// Path to image folder
    #[arg(short = 'f', long = "input_dir")]
    input_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Open the labeling window (default)
    Ui,
    /// Print every image with its label file and current label
    List {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    logging::init_logging();
    let cli = Cli::parse();
    let config = AppConfig::default();

    let service = match open_filesystem_service(&cli.input_dir) {
        Ok(service) => service,
        Err(err) => {
            error!(error = %err, "failed to open labeling session");
            eprintln!("failed to open {}: {err}", cli.input_dir.display());
            return ExitCode::from(1);
        }
    };

    match run_command(cli.command.unwrap_or(Command::Ui), service, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn run_command(
    command: Command,
    service: ApplicationService,
    config: &AppConfig,
) -> Result<(), String> {
    match command {
        Command::Ui => ui::launch_window(service, config),
        Command::List { json } => {
            let records = service
                .list_labels(ListLabelsCommand)
                .map_err(|error| format!("list failed: {error}"))?;
            println!("{}", render_records(&records, json)?);
            Ok(())
        }
    }
}

fn render_records(records: &[LabelRecord], json: bool) -> Result<String, String> {
    if json {
        return serde_json::to_string_pretty(records)
            .map_err(|error| format!("list failed: {error}"));
    }
    if records.is_empty() {
        return Ok("no images in folder".to_string());
    }
    Ok(records
        .iter()
        .map(present_label_row)
        .collect::<Vec<_>>()
        .join("\n"))
}
