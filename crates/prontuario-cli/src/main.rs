use clap::Parser;
use eyre::Result;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use prontuario_cli::config::{self, CliConfig, OutputFormat};
use prontuario_cli::{evaluate, render};
use prontuario_core::models::braden::BradenAssessment;
use prontuario_core::models::chart::ShiftChart;
use prontuario_core::models::fluid_balance::FluidBalanceRecord;
use prontuario_core::models::morse::MorseAssessment;
use prontuario_core::models::vitals::VitalSign;
use prontuario_scales::scales::{braden, morse};
use prontuario_scales::{RiskScale, all_scales};

mod cli;

use cli::{Cli, Command, ConfigAction};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let mut settings = config::load_config(&config_path)?;
    if let Some(output) = cli.output {
        settings.output = output;
    }
    settings.flagged_only |= cli.flagged_only;

    match cli.command {
        Command::Classify { sign, value } => {
            let sign: VitalSign = sign.parse()?;
            let analysis = prontuario_vitals::classify(sign, &value);
            emit(&settings, &analysis, || render::analysis(sign, &value, &analysis))?;
        }
        Command::Balance(args) => {
            let record = FluidBalanceRecord {
                intake_oral: args.intake_oral,
                intake_parenteral: args.intake_parenteral,
                intake_other: args.intake_other,
                output_urine: args.output_urine,
                output_emesis: args.output_emesis,
                output_drains: args.output_drains,
                balance_total: 0.0,
            }
            .recompute();
            emit(&settings, &record, || render::balance(&record))?;
        }
        Command::Braden(args) => {
            let assessment = BradenAssessment {
                sensory: args.sensory,
                moisture: args.moisture,
                activity: args.activity,
                mobility: args.mobility,
                nutrition: args.nutrition,
                friction: args.friction,
            };
            warn_invalid(&braden::Braden, &braden::entries(&assessment));
            let score = braden::score(&assessment);
            emit(&settings, &score, || render::braden(&score))?;
        }
        Command::Morse(args) => {
            let assessment = MorseAssessment {
                history: args.history,
                diagnosis: args.diagnosis,
                ambulatory_aid: args.ambulatory_aid,
                iv_therapy: args.iv_therapy,
                gait: args.gait,
                mental_status: args.mental_status,
            };
            warn_invalid(&morse::Morse, &morse::entries(&assessment));
            let score = morse::score(&assessment);
            emit(&settings, &score, || render::morse(&score))?;
        }
        Command::Evaluate { path } => {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| eyre::eyre!("failed to read chart at {}: {e}", path.display()))?;
            let chart = ShiftChart::from_json(&contents)?;
            let evaluation = evaluate::evaluate(&chart);
            emit(&settings, &evaluation, || {
                render::evaluation(&evaluation, settings.flagged_only)
            })?;
        }
        Command::Scales => {
            let scales = all_scales();
            let catalog: Vec<_> = scales
                .iter()
                .map(|s| serde_json::json!({ "id": s.id(), "name": s.name(), "items": s.items() }))
                .collect();
            emit(&settings, &catalog, || render::scales(&scales))?;
        }
        Command::Config { action } => match action {
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&CliConfig::default(), &config_path)?;
                println!("{}", config_path.display());
            }
            ConfigAction::Show => {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            }
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn emit<T: Serialize>(settings: &CliConfig, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    match settings.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => print!("{}", with_newline(text())),
    }
    Ok(())
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn warn_invalid(scale: &dyn RiskScale, entries: &[prontuario_scales::scoring::ScoreEntry]) {
    for error in scale.validate_entries(entries) {
        tracing::warn!(scale = scale.id(), item = %error.item_id, "{error}");
    }
}
