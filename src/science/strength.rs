// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::formulas::{
    abrams_power_strength, binder_interaction_factor, clamp_range, log_age_factor,
};
use crate::mix::MixDesign;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Compressive strength bounds (MPa)
pub const COMPRESSIVE_RANGE: (f64, f64) = (10.0, 120.0);
/// Tensile strength bounds (MPa)
pub const TENSILE_RANGE: (f64, f64) = (1.0, 15.0);

const SLAG_COEFFICIENT: f64 = 0.3;
const FLY_ASH_COEFFICIENT: f64 = 0.2;
const SILICA_FUME_COEFFICIENT: f64 = 0.4;

/// Binder-interaction multipliers, each 1 when the binder total is 0.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinderFactors {
    pub total_binder: f64,
    pub slag: f64,
    pub fly_ash: f64,
    pub silica_fume: f64,
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub base_strength: f64, // MPa, Abrams power law
    pub age_factor: f64,
    pub unclamped_compressive: f64, // MPa
    pub compressive_strength: f64,  // MPa, clamped
    pub unclamped_tensile: f64,     // MPa
    pub tensile_strength: f64,      // MPa, clamped
}

#[wasm_bindgen]
pub struct StrengthEngine;

#[wasm_bindgen]
impl StrengthEngine {
    pub fn binder_factors(mix: &MixDesign) -> BinderFactors {
        let total_binder = mix.total_binder();
        BinderFactors {
            total_binder,
            slag: binder_interaction_factor(SLAG_COEFFICIENT, mix.slag, total_binder),
            fly_ash: binder_interaction_factor(FLY_ASH_COEFFICIENT, mix.fly_ash, total_binder),
            silica_fume: binder_interaction_factor(
                SILICA_FUME_COEFFICIENT,
                mix.silica_fume,
                total_binder,
            ),
        }
    }

    /// Compressive and tensile strength for the binder-factor model.
    ///
    /// Degenerate mixes (no water or no cement) return all zeros without
    /// touching the power law.
    pub fn compute(mix: &MixDesign, age_days: f64) -> StrengthResult {
        if mix.is_degenerate() {
            return StrengthResult::default();
        }

        let factors = Self::binder_factors(mix);
        let age_factor = log_age_factor(age_days);
        let base_strength = abrams_power_strength(factors.total_binder, mix.water);

        // Factor order is fixed; results are compared bit for bit.
        let unclamped_compressive = base_strength
            * age_factor
            * factors.slag
            * factors.fly_ash
            * factors.silica_fume
            * (1.0 + mix.superplasticizer / 100.0);
        let compressive_strength =
            clamp_range(unclamped_compressive, COMPRESSIVE_RANGE.0, COMPRESSIVE_RANGE.1);

        let unclamped_tensile = Self::tensile_unclamped(compressive_strength, mix.silica_fume);
        let tensile_strength = clamp_range(unclamped_tensile, TENSILE_RANGE.0, TENSILE_RANGE.1);

        StrengthResult {
            base_strength,
            age_factor,
            unclamped_compressive,
            compressive_strength,
            unclamped_tensile,
            tensile_strength,
        }
    }

    /// f_t = f_c × (0.08 + 0.07 × SF / 100)
    ///
    /// SF is the raw silica-fume mass in kg/m³, not its binder fraction.
    pub fn tensile_unclamped(compressive: f64, silica_fume: f64) -> f64 {
        compressive * (0.08 + 0.07 * silica_fume / 100.0)
    }
}

/// Performance band of a predicted compressive strength.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceClass {
    Standard = 0,
    MediumHigh = 1,
    High = 2,
    VeryHigh = 3,
    UltraHigh = 4,
}

impl PerformanceClass {
    pub fn from_strength(fc: f64) -> Self {
        if fc >= 100.0 {
            PerformanceClass::UltraHigh
        } else if fc >= 80.0 {
            PerformanceClass::VeryHigh
        } else if fc >= 60.0 {
            PerformanceClass::High
        } else if fc >= 40.0 {
            PerformanceClass::MediumHigh
        } else {
            PerformanceClass::Standard
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceClass::UltraHigh => "Ultra-High Performance",
            PerformanceClass::VeryHigh => "Very High Performance",
            PerformanceClass::High => "High Performance",
            PerformanceClass::MediumHigh => "Medium-High Performance",
            PerformanceClass::Standard => "Standard Performance",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PerformanceClass::UltraHigh => "Exceptional (>=100 MPa)",
            PerformanceClass::VeryHigh => "Excellent (80-100 MPa)",
            PerformanceClass::High => "Good (60-80 MPa)",
            PerformanceClass::MediumHigh => "Standard (40-60 MPa)",
            PerformanceClass::Standard => "Basic (<40 MPa)",
        }
    }

    /// Typical applications; the dashboard groups strength into three tiers.
    pub fn applications(self) -> [&'static str; 3] {
        match self {
            PerformanceClass::UltraHigh | PerformanceClass::VeryHigh => [
                "Bridge Structures",
                "High-Rise Buildings",
                "Protective Structures",
            ],
            PerformanceClass::High => [
                "Structural Elements",
                "Marine Structures",
                "Industrial Floors",
            ],
            PerformanceClass::MediumHigh | PerformanceClass::Standard => {
                ["General Construction", "Pavements", "Foundations"]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> MixDesign {
        MixDesign::new(400.0, 160.0, 0.0, 0.0, 40.0, 1000.0, 750.0, 12.0)
    }

    #[test]
    fn test_zero_cement_safety() {
        let mix = MixDesign::new(0.0, 160.0, 0.0, 0.0, 40.0, 1000.0, 750.0, 12.0);
        let result = StrengthEngine::compute(&mix, 28.0);
        assert_eq!(result, StrengthResult::default());
    }

    #[test]
    fn test_standard_uhpc_reference_value() {
        let result = StrengthEngine::compute(&standard(), 28.0);
        assert!((result.base_strength - 81.207).abs() < 0.01);
        assert!((result.age_factor - 1.0).abs() < 1e-12);
        // 81.207 × 1.03636 × 1.12 = 94.26
        assert!(
            (result.compressive_strength - 94.259).abs() / 94.259 < 0.01,
            "got {}",
            result.compressive_strength
        );
        assert_eq!(result.compressive_strength, result.unclamped_compressive);
    }

    #[test]
    fn test_binder_factors_sustainable_mix() {
        // binder = 300 + 120 + 80 + 25 = 525
        let mix = MixDesign::new(300.0, 150.0, 120.0, 80.0, 25.0, 1000.0, 750.0, 8.0);
        let f = StrengthEngine::binder_factors(&mix);
        assert_eq!(f.total_binder, 525.0);
        assert!((f.slag - (1.0 + 0.3 * 120.0 / 525.0)).abs() < 1e-12);
        assert!((f.fly_ash - (1.0 + 0.2 * 80.0 / 525.0)).abs() < 1e-12);
        assert!((f.silica_fume - (1.0 + 0.4 * 25.0 / 525.0)).abs() < 1e-12);
    }

    #[test]
    fn test_wc_trend_abrams_law() {
        let water = crate::mix::MaterialType::Water;
        let strong = StrengthEngine::compute(&standard().with(water, 130.0), 7.0);
        let weak = StrengthEngine::compute(&standard().with(water, 240.0), 7.0);
        assert!(strong.compressive_strength > weak.compressive_strength);
    }

    #[test]
    fn test_compressive_clamped_high() {
        // w/b ≈ 0.2 with heavy superplasticizer blows past 120 MPa
        let mix = MixDesign::new(500.0, 110.0, 0.0, 0.0, 50.0, 1000.0, 750.0, 20.0);
        let result = StrengthEngine::compute(&mix, 365.0);
        assert!(result.unclamped_compressive > 120.0);
        assert_eq!(result.compressive_strength, 120.0);
    }

    #[test]
    fn test_compressive_clamped_low() {
        let mix = MixDesign::new(50.0, 250.0, 0.0, 0.0, 0.0, 1000.0, 750.0, 0.0);
        let result = StrengthEngine::compute(&mix, 1.0);
        assert!(result.unclamped_compressive < 10.0);
        assert_eq!(result.compressive_strength, 10.0);
    }

    #[test]
    fn test_tensile_uses_raw_silica_fume() {
        // Not binder-normalized: 40 kg/m³ gives 0.08 + 0.07 × 0.4 = 0.108
        let ft = StrengthEngine::tensile_unclamped(100.0, 40.0);
        assert!((ft - 10.8).abs() < 1e-9);
    }

    #[test]
    fn test_performance_class_boundaries() {
        assert_eq!(PerformanceClass::from_strength(100.0), PerformanceClass::UltraHigh);
        assert_eq!(PerformanceClass::from_strength(99.9), PerformanceClass::VeryHigh);
        assert_eq!(PerformanceClass::from_strength(60.0), PerformanceClass::High);
        assert_eq!(PerformanceClass::from_strength(40.0), PerformanceClass::MediumHigh);
        assert_eq!(PerformanceClass::from_strength(39.9), PerformanceClass::Standard);
        assert_eq!(PerformanceClass::High.applications()[1], "Marine Structures");
    }
}
