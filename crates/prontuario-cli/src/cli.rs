use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use prontuario_cli::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "prontuario", version, about = "Nursing chart evaluation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to the user config directory).
    #[arg(long, global = true, env = "PRONTUARIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format, overriding the config file.
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Only list vitals that are not normal.
    #[arg(long, global = true)]
    pub flagged_only: bool,

    /// Debug-level logging on stderr.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify one vital-sign reading.
    Classify {
        /// bloodPressure, pulse, heartRate, temperature, saturation,
        /// glycemia, co2 or oxygen.
        sign: String,
        value: String,
    },
    /// Compute the fluid balance of a sheet.
    Balance(BalanceArgs),
    /// Score a Braden assessment. Omitted items stay unset.
    Braden(BradenArgs),
    /// Score a Morse assessment. Omitted items score 0.
    Morse(MorseArgs),
    /// Evaluate a shift chart JSON file.
    Evaluate { path: PathBuf },
    /// List the risk scales and their options.
    Scales,
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a default config file.
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config.
    Show,
}

#[derive(Debug, Args)]
pub struct BalanceArgs {
    #[arg(long, default_value = "")]
    pub intake_oral: String,
    #[arg(long, default_value = "")]
    pub intake_parenteral: String,
    #[arg(long, default_value = "")]
    pub intake_other: String,
    #[arg(long, default_value = "")]
    pub output_urine: String,
    #[arg(long, default_value = "")]
    pub output_emesis: String,
    #[arg(long, default_value = "")]
    pub output_drains: String,
}

#[derive(Debug, Args)]
pub struct BradenArgs {
    #[arg(long)]
    pub sensory: Option<u8>,
    #[arg(long)]
    pub moisture: Option<u8>,
    #[arg(long)]
    pub activity: Option<u8>,
    #[arg(long)]
    pub mobility: Option<u8>,
    #[arg(long)]
    pub nutrition: Option<u8>,
    #[arg(long)]
    pub friction: Option<u8>,
}

#[derive(Debug, Args)]
pub struct MorseArgs {
    #[arg(long, default_value_t = 0)]
    pub history: u8,
    #[arg(long, default_value_t = 0)]
    pub diagnosis: u8,
    #[arg(long, default_value_t = 0)]
    pub ambulatory_aid: u8,
    #[arg(long, default_value_t = 0)]
    pub iv_therapy: u8,
    #[arg(long, default_value_t = 0)]
    pub gait: u8,
    #[arg(long, default_value_t = 0)]
    pub mental_status: u8,
}
