// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Requirement-driven mix selection.
//!
//! Not a search: the target strength picks one of three pre-tuned
//! solutions, which is then checked against the project requirements.

use crate::error::Result;
use crate::guardrails::check_age;
use crate::mix::{name_key, MixDesign, MixPreset};
use crate::property_kernel::{PropertyEstimate, PropertyKernel};
use crate::science::cost::CostTable;
use crate::science::sustainability::SustainabilityEngine;
use serde::{Deserialize, Serialize};

/// Age of the early-strength check.
pub const EARLY_AGE_DAYS: f64 = 7.0;

pub const ULTRA_HIGH_SOLUTION: MixPreset = MixPreset {
    name: "Ultra-High Performance Solution",
    mix: MixDesign {
        cement: 450.0,
        water: 135.0,
        slag: 0.0,
        fly_ash: 0.0,
        silica_fume: 50.0,
        coarse_aggregate: 950.0,
        fine_aggregate: 700.0,
        superplasticizer: 18.0,
    },
};

pub const HIGH_PERFORMANCE_SOLUTION: MixPreset = MixPreset {
    name: "High-Performance Optimized",
    mix: MixDesign {
        cement: 400.0,
        water: 150.0,
        slag: 50.0,
        fly_ash: 0.0,
        silica_fume: 40.0,
        coarse_aggregate: 1000.0,
        fine_aggregate: 750.0,
        superplasticizer: 15.0,
    },
};

pub const BALANCED_SOLUTION: MixPreset = MixPreset {
    name: "Balanced Performance",
    mix: MixDesign {
        cement: 350.0,
        water: 165.0,
        slag: 80.0,
        fly_ash: 40.0,
        silica_fume: 25.0,
        coarse_aggregate: 1050.0,
        fine_aggregate: 800.0,
        superplasticizer: 12.0,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Application {
    BridgeStructure,
    HighRiseBuilding,
    MarineStructure,
    IndustrialFloor,
    Other,
}

impl Application {
    pub fn from_name(s: &str) -> Self {
        match name_key(s).as_str() {
            "bridge" | "bridgestructure" => Application::BridgeStructure,
            "highrise" | "highrisebuilding" => Application::HighRiseBuilding,
            "marine" | "marinestructure" => Application::MarineStructure,
            "industrialfloor" | "floor" => Application::IndustrialFloor,
            _ => Application::Other,
        }
    }

    /// Suitability percentage of a candidate for this application.
    pub fn suitability(self, estimate: &PropertyEstimate, scm_percentage: f64) -> u8 {
        match self {
            Application::BridgeStructure => {
                if estimate.compressive_strength > 80.0 {
                    95
                } else {
                    75
                }
            }
            Application::HighRiseBuilding => {
                if estimate.compressive_strength > 70.0 {
                    90
                } else {
                    70
                }
            }
            Application::MarineStructure => {
                if scm_percentage > 20.0 {
                    85
                } else {
                    65
                }
            }
            Application::IndustrialFloor => {
                if estimate.cost < 100.0 {
                    90
                } else {
                    70
                }
            }
            Application::Other => 80,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuitabilityLevel {
    Excellent,
    Good,
    Acceptable,
}

impl SuitabilityLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            SuitabilityLevel::Excellent
        } else if score >= 75 {
            SuitabilityLevel::Good
        } else {
            SuitabilityLevel::Acceptable
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Optimal,
    Good,
    NeedsAdjustment,
}

impl Verdict {
    pub fn from_count(met: u8) -> Self {
        match met {
            3 => Verdict::Optimal,
            2 => Verdict::Good,
            _ => Verdict::NeedsAdjustment,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Optimal => "All requirements met - optimal solution found",
            Verdict::Good => "Most requirements met - good solution",
            Verdict::NeedsAdjustment => "Requirements need adjustment",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRequirements {
    pub target_strength: f64, // MPa
    pub target_age: f64,      // days
    pub max_cost: f64,        // currency / m³
    pub early_strength: f64,  // MPa at 7 days
    pub application: Application,
}

impl Default for ProjectRequirements {
    fn default() -> Self {
        Self {
            target_strength: 80.0,
            target_age: 28.0,
            max_cost: 120.0,
            early_strength: 50.0,
            application: Application::BridgeStructure,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequirementCheck {
    pub solution: String,
    pub mix: MixDesign,
    pub estimate: PropertyEstimate,
    pub early_estimate: PropertyEstimate,
    pub meets_strength: bool,
    pub meets_early_strength: bool,
    pub meets_budget: bool,
    pub requirements_met: u8,
    pub verdict: Verdict,
    pub water_cement_ratio: f64,
    pub scm_percentage: f64,
    pub strength_per_cost: f64,
    pub suitability_score: u8,
    pub suitability: SuitabilityLevel,
}

pub fn select_solution(target_strength: f64) -> &'static MixPreset {
    if target_strength >= 100.0 {
        &ULTRA_HIGH_SOLUTION
    } else if target_strength >= 80.0 {
        &HIGH_PERFORMANCE_SOLUTION
    } else {
        &BALANCED_SOLUTION
    }
}

/// Fails when the target age is negative or not finite.
pub fn optimize(
    requirements: &ProjectRequirements,
    costs: &CostTable,
) -> Result<RequirementCheck> {
    check_age(requirements.target_age)?;
    let solution = select_solution(requirements.target_strength);
    let mix = solution.mix;

    let estimate = PropertyKernel::predict_with(&mix, requirements.target_age, costs);
    let early_estimate = PropertyKernel::predict_with(&mix, EARLY_AGE_DAYS, costs);

    let meets_strength = estimate.compressive_strength >= requirements.target_strength;
    let meets_early_strength = early_estimate.compressive_strength >= requirements.early_strength;
    let meets_budget = estimate.cost <= requirements.max_cost;
    let requirements_met = [meets_strength, meets_early_strength, meets_budget]
        .iter()
        .filter(|&&m| m)
        .count() as u8;

    let scm_percentage = SustainabilityEngine::scm_percentage(&mix);
    let suitability_score = requirements.application.suitability(&estimate, scm_percentage);

    tracing::info!(
        solution = solution.name,
        requirements_met,
        suitability_score,
        "requirement check complete"
    );

    Ok(RequirementCheck {
        solution: solution.name.to_string(),
        mix,
        estimate,
        early_estimate,
        meets_strength,
        meets_early_strength,
        meets_budget,
        requirements_met,
        verdict: Verdict::from_count(requirements_met),
        water_cement_ratio: mix.water_cement_ratio(),
        scm_percentage,
        strength_per_cost: estimate.strength_per_cost(),
        suitability_score,
        suitability: SuitabilityLevel::from_score(suitability_score),
    })
}
