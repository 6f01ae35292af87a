// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Named demonstration mixes used by the dashboard scenarios.

use super::MixDesign;
use crate::error::{Error, Result};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct MixPreset {
    pub name: &'static str,
    pub mix: MixDesign,
}

#[allow(clippy::too_many_arguments)]
const fn mix(
    cement: f64,
    water: f64,
    slag: f64,
    fly_ash: f64,
    silica_fume: f64,
    coarse_aggregate: f64,
    fine_aggregate: f64,
    superplasticizer: f64,
) -> MixDesign {
    MixDesign {
        cement,
        water,
        slag,
        fly_ash,
        silica_fume,
        coarse_aggregate,
        fine_aggregate,
        superplasticizer,
    }
}

pub const STANDARD_UHPC: MixPreset = MixPreset {
    name: "Standard UHPC",
    mix: mix(400.0, 160.0, 0.0, 0.0, 40.0, 1000.0, 750.0, 12.0),
};

pub const HIGH_STRENGTH_BRIDGE: MixPreset = MixPreset {
    name: "High-Strength Bridge",
    mix: mix(450.0, 140.0, 50.0, 0.0, 45.0, 950.0, 700.0, 15.0),
};

pub const SUSTAINABLE_MIX: MixPreset = MixPreset {
    name: "Sustainable Mix",
    mix: mix(300.0, 150.0, 120.0, 80.0, 25.0, 1000.0, 750.0, 8.0),
};

pub const COST_OPTIMIZED: MixPreset = MixPreset {
    name: "Cost-Optimized",
    mix: mix(320.0, 175.0, 80.0, 60.0, 15.0, 1050.0, 800.0, 6.0),
};

/// Starting point for custom parameter entry.
pub const CUSTOM_DEFAULT: MixPreset = MixPreset {
    name: "Custom Parameters",
    mix: mix(350.0, 175.0, 50.0, 30.0, 20.0, 1000.0, 750.0, 8.0),
};

pub const HIGH_PERFORMANCE_UHPC: MixPreset = MixPreset {
    name: "High-Performance UHPC",
    mix: mix(450.0, 140.0, 0.0, 0.0, 50.0, 950.0, 700.0, 15.0),
};

pub const SUSTAINABLE_UHPC: MixPreset = MixPreset {
    name: "Sustainable UHPC",
    mix: mix(300.0, 150.0, 120.0, 80.0, 25.0, 1000.0, 750.0, 10.0),
};

pub const LONG_TERM_PERFORMANCE: MixPreset = MixPreset {
    name: "Long-term Performance",
    mix: mix(300.0, 150.0, 100.0, 80.0, 25.0, 1000.0, 750.0, 10.0),
};

pub const ALL_PRESETS: [MixPreset; 8] = [
    STANDARD_UHPC,
    HIGH_STRENGTH_BRIDGE,
    SUSTAINABLE_MIX,
    COST_OPTIMIZED,
    CUSTOM_DEFAULT,
    HIGH_PERFORMANCE_UHPC,
    SUSTAINABLE_UHPC,
    LONG_TERM_PERFORMANCE,
];

/// The three-way "Standard vs UHPC vs Sustainable" comparison set.
pub const COMPARISON_SET: [MixPreset; 3] = [STANDARD_UHPC, HIGH_PERFORMANCE_UHPC, SUSTAINABLE_UHPC];

/// Lowercase alphanumerics only, for forgiving name lookups.
pub fn name_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Case and punctuation insensitive: "standard-uhpc" finds "Standard UHPC".
pub fn find_preset(name: &str) -> Result<&'static MixPreset> {
    let wanted = name_key(name);
    ALL_PRESETS
        .iter()
        .find(|p| name_key(p.name) == wanted)
        .ok_or_else(|| Error::UnknownPreset(name.to_string()))
}
