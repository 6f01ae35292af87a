// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! uhpc_compute: CLI front end for the UHPC property engines
//!
//! Mix input is a JSON object given with --json, piped on stdin, or picked
//! by name with --preset. Results are JSON on stdout; logs go to stderr.
//!
//! Usage:
//!   echo '{"cement":400,"water":160,"silica_fume":40,"coarse_agg":1000,"fine_agg":750,"sp":12}' | uhpc_compute predict --age 28
//!   uhpc_compute predict --preset "Standard UHPC" --age 7
//!   uhpc_compute compare --age 28 --rank-by strength-per-cost
//!   uhpc_compute optimize --target-strength 100 --application marine

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use uhpc_core::mix::{
    find_preset, LinearMixDesign, MixDesign, ALL_PRESETS, COMPARISON_SET, REPORT_SAMPLE,
};
use uhpc_core::models::LinearCoefficientModel;
use uhpc_core::optimization::{
    optimize, try_compare, Application, Candidate, ProjectRequirements, RankBy,
};
use uhpc_core::report::ReportData;
use uhpc_core::science::maturity::MaturityEngine;
use uhpc_core::{EngineConfig, Error, PropertyKernel, Result};

#[derive(Parser)]
#[command(name = "uhpc_compute")]
#[command(about = "UHPC property prediction and strength development", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Engine configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Binder-factor prediction with analysis and validation events
    Predict {
        #[command(flatten)]
        input: MixInput,

        /// Curing age in days
        #[arg(long, default_value_t = 28.0)]
        age: f64,
    },

    /// Linear-coefficient prediction (report sample when no input is given)
    Linear {
        /// LinearMixDesign JSON
        #[arg(long)]
        json: Option<String>,

        /// Use the built-in report sample
        #[arg(long)]
        sample: bool,
    },

    /// Model curve against ACI 209R-92 and Eurocode 2
    Validate {
        #[command(flatten)]
        input: MixInput,
    },

    /// Properties over the key ages
    Progression {
        #[command(flatten)]
        input: MixInput,

        /// Last age included (days)
        #[arg(long)]
        max_age: Option<f64>,
    },

    /// Rank the comparison presets (or a JSON array of {name, mix})
    Compare {
        /// Candidates JSON
        #[arg(long)]
        json: Option<String>,

        #[arg(long, default_value_t = 28.0)]
        age: f64,

        #[arg(long, value_enum, default_value_t = RankArg::Strength)]
        rank_by: RankArg,
    },

    /// Pick and check a solution for project requirements
    Optimize {
        #[arg(long, default_value_t = 80.0)]
        target_strength: f64,

        #[arg(long, default_value_t = 28.0)]
        target_age: f64,

        #[arg(long, default_value_t = 120.0)]
        max_cost: f64,

        /// Minimum 7-day strength (MPa)
        #[arg(long, default_value_t = 50.0)]
        early_strength: f64,

        #[arg(long, default_value = "bridge")]
        application: String,
    },

    /// Data behind the static report
    Report {
        /// Seed for the age-curve noise; omitted means no noise
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the named presets
    Presets,
}

#[derive(clap::Args)]
struct MixInput {
    /// MixDesign JSON; read from stdin when neither this nor --preset is given
    #[arg(long, conflicts_with = "preset")]
    json: Option<String>,

    /// Named preset, e.g. "Standard UHPC"
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum RankArg {
    Strength,
    StrengthPerCost,
}

impl From<RankArg> for RankBy {
    fn from(arg: RankArg) -> Self {
        match arg {
            RankArg::Strength => RankBy::CompressiveStrength,
            RankArg::StrengthPerCost => RankBy::StrengthPerCost,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    uhpc_core::logging::init_with_level(&cli.log_level);

    let config = EngineConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Predict { input, age } => {
            let mix = input.resolve()?;
            emit(&PropertyKernel::compute(&mix, age, &config)?)
        }
        Commands::Linear { json, sample } => {
            let mix = match (json, sample) {
                (Some(j), false) => LinearMixDesign::from_json(&j)?,
                (None, true) => REPORT_SAMPLE,
                (None, false) => match read_stdin()? {
                    Some(j) => LinearMixDesign::from_json(&j)?,
                    None => REPORT_SAMPLE,
                },
                (Some(_), true) => {
                    return Err(Error::Config("--json and --sample are exclusive".to_string()))
                }
            };
            let estimate = LinearCoefficientModel::try_predict(&mix, &config.linear_cost)?;
            emit(&estimate.rounded())
        }
        Commands::Validate { input } => {
            let mix = input.resolve()?;
            mix.validate()?;
            let ages = MaturityEngine::day_range(
                config.validation.first_age_days,
                config.validation.last_age_days,
            );
            emit(&MaturityEngine::new().development_curves(&mix, &ages))
        }
        Commands::Progression { input, max_age } => {
            let mix = input.resolve()?;
            mix.validate()?;
            let max_age = max_age.unwrap_or(config.validation.progression_max_age_days);
            emit(&MaturityEngine::new().progression(&mix, max_age, &config.cost))
        }
        Commands::Compare { json, age, rank_by } => {
            let candidates: Vec<Candidate> = match json {
                Some(j) => serde_json::from_str(&j)?,
                None => COMPARISON_SET.iter().map(Candidate::from).collect(),
            };
            emit(&try_compare(&candidates, age, rank_by.into(), &config.cost)?)
        }
        Commands::Optimize {
            target_strength,
            target_age,
            max_cost,
            early_strength,
            application,
        } => {
            let requirements = ProjectRequirements {
                target_strength,
                target_age,
                max_cost,
                early_strength,
                application: Application::from_name(&application),
            };
            emit(&optimize(&requirements, &config.cost)?)
        }
        Commands::Report { seed } => emit(&ReportData::build(&config.linear_cost, seed)),
        Commands::Presets => emit(&ALL_PRESETS),
    }
}

impl MixInput {
    fn resolve(&self) -> Result<MixDesign> {
        if let Some(name) = &self.preset {
            return Ok(find_preset(name)?.mix);
        }
        let json = match &self.json {
            Some(j) => j.clone(),
            None => read_stdin()?.ok_or_else(|| {
                Error::Config("no mix given: use --json, --preset or stdin".to_string())
            })?,
        };
        MixDesign::from_json(&json)
    }
}

/// Piped stdin contents, `None` for a terminal or empty input.
fn read_stdin() -> Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

fn emit<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
