// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Engine configuration.
//!
//! Every field has a default, so an empty TOML file (or no file at all)
//! reproduces the published coefficients exactly.

use crate::error::{Error, Result};
use crate::guardrails::InputRanges;
use crate::science::cost::{CostTable, LinearCostTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Unit costs for the binder-factor model
    #[serde(default)]
    pub cost: CostTable,

    /// Unit costs for the linear-coefficient model
    #[serde(default)]
    pub linear_cost: LinearCostTable,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub ranges: InputRanges,

    /// Reject inputs outside `ranges` instead of reporting them as events
    #[serde(default)]
    pub enforce_ranges: bool,
}

/// Age window of the literature-validation curves and the timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_first_age")]
    pub first_age_days: u32,
    #[serde(default = "default_last_age")]
    pub last_age_days: u32,
    #[serde(default = "default_progression_max_age")]
    pub progression_max_age_days: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            first_age_days: default_first_age(),
            last_age_days: default_last_age(),
            progression_max_age_days: default_progression_max_age(),
        }
    }
}

fn default_first_age() -> u32 {
    1
}

fn default_last_age() -> u32 {
    90
}

fn default_progression_max_age() -> f64 {
    90.0
}

impl EngineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded engine config from {:?}", path);
        Ok(config)
    }

    /// `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => {
                tracing::debug!("No engine config given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let cost = &self.cost;
        let unit_costs = [
            cost.cement,
            cost.slag,
            cost.fly_ash,
            cost.silica_fume,
            cost.coarse_aggregate,
            cost.fine_aggregate,
            cost.superplasticizer,
            cost.water,
        ];
        if unit_costs.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(Error::Config(
                "unit costs must be finite and non-negative".to_string(),
            ));
        }

        let v = &self.validation;
        if v.first_age_days == 0 || v.first_age_days > v.last_age_days {
            return Err(Error::Config(format!(
                "validation ages must satisfy 1 <= first <= last, got {}..={}",
                v.first_age_days, v.last_age_days
            )));
        }

        self.ranges.validate()
    }
}
