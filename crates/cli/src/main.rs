use anyhow::Result;
use clap::{Parser, Subcommand};
use orgchart::commands::{analyze_command, show_config_command};
use orgchart::init_tracing;

/// Organization structure analyzer CLI.
///
/// This CLI is a thin wrapper around `orgchart-core` (exposed in code as
/// `orgchart_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "orgchart",
    version,
    about = "Check manager salaries and reporting-line lengths in an employee file",
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze an employee CSV file.
    ///
    /// Reports:
    /// - managers earning outside the allowed band relative to their direct reports;
    /// - employees with too many managers between them and the CEO.
    Analyze {
        /// Employee CSV file (header line, then `id,firstName,lastName,salary,managerId`).
        #[arg(long, short, default_value = "employees.csv")]
        input: String,

        /// Optional analysis config (.json, .yaml or .yml).
        #[arg(long)]
        config: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the effective analysis configuration.
    ShowConfig {
        /// Optional analysis config (.json, .yaml or .yml).
        #[arg(long)]
        config: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Analyze { input, config, json } => {
            analyze_command(&input, config.as_deref(), json)?
        }
        Command::ShowConfig { config, json } => show_config_command(config.as_deref(), json)?,
    }

    Ok(())
}
