// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::formulas::{aci209_percent, eurocode2_percent, REFERENCE_AGE_DAYS};
use crate::mix::MixDesign;
use crate::property_kernel::PropertyKernel;
use crate::science::cost::CostTable;
use crate::science::strength::StrengthEngine;
use serde::{Deserialize, Serialize};

/// Ages sampled by the strength development timeline.
pub const KEY_AGES: [f64; 9] = [1.0, 3.0, 7.0, 14.0, 28.0, 56.0, 90.0, 180.0, 365.0];

/// Model curve next to the two literature curves, all as % of 28-day strength.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentCurves {
    pub ages: Vec<f64>,
    pub model_percent: Vec<f64>,
    pub aci209_percent: Vec<f64>,
    pub eurocode2_percent: Vec<f64>,
    pub strength_28d: f64, // MPa, normalization reference
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    pub age: f64,
    pub compressive_strength: f64, // MPa
    pub tensile_strength: f64,     // MPa
    pub elastic_modulus_gpa: f64,
    pub strength_gain_percent: f64, // % of 28-day strength
}

pub struct MaturityEngine {
    reference_age: f64,
}

impl Default for MaturityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MaturityEngine {
    pub fn new() -> MaturityEngine {
        MaturityEngine {
            reference_age: REFERENCE_AGE_DAYS,
        }
    }

    /// Strength development of one mix against ACI 209R-92 and Eurocode 2.
    ///
    /// A mix with no 28-day strength (degenerate input) yields 0 % for the
    /// model curve instead of dividing by zero.
    pub fn development_curves(&self, mix: &MixDesign, ages: &[f64]) -> DevelopmentCurves {
        let strength_28d = StrengthEngine::compute(mix, self.reference_age).compressive_strength;

        let model_percent = ages
            .iter()
            .map(|&age| {
                if strength_28d > 0.0 {
                    StrengthEngine::compute(mix, age).compressive_strength / strength_28d * 100.0
                } else {
                    0.0
                }
            })
            .collect();

        DevelopmentCurves {
            ages: ages.to_vec(),
            model_percent,
            aci209_percent: ages.iter().map(|&a| aci209_percent(a)).collect(),
            eurocode2_percent: ages.iter().map(|&a| eurocode2_percent(a)).collect(),
            strength_28d,
        }
    }

    /// Whole-day ages `first..=last`, the validation view's x axis.
    pub fn day_range(first: u32, last: u32) -> Vec<f64> {
        (first..=last).map(f64::from).collect()
    }

    /// Property timeline over `KEY_AGES` up to `max_age`.
    pub fn progression(
        &self,
        mix: &MixDesign,
        max_age: f64,
        costs: &CostTable,
    ) -> Vec<ProgressionPoint> {
        let reference = PropertyKernel::predict_with(mix, self.reference_age, costs);

        KEY_AGES
            .iter()
            .copied()
            .filter(|&age| age <= max_age)
            .map(|age| {
                let estimate = PropertyKernel::predict_with(mix, age, costs);
                let strength_gain_percent = if reference.compressive_strength > 0.0 {
                    estimate.compressive_strength / reference.compressive_strength * 100.0
                } else {
                    0.0
                };
                ProgressionPoint {
                    age,
                    compressive_strength: estimate.compressive_strength,
                    tensile_strength: estimate.tensile_strength,
                    elastic_modulus_gpa: estimate.elastic_modulus / 1000.0,
                    strength_gain_percent,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> MixDesign {
        MixDesign::new(400.0, 160.0, 0.0, 0.0, 40.0, 1000.0, 750.0, 12.0)
    }

    #[test]
    fn test_curves_are_parallel() {
        let ages = MaturityEngine::day_range(1, 90);
        let curves = MaturityEngine::new().development_curves(&standard(), &ages);
        assert_eq!(curves.ages.len(), 90);
        assert_eq!(curves.model_percent.len(), 90);
        assert_eq!(curves.aci209_percent.len(), 90);
        assert_eq!(curves.eurocode2_percent.len(), 90);
    }

    #[test]
    fn test_model_is_100_percent_at_28_days() {
        let curves = MaturityEngine::new().development_curves(&standard(), &[28.0]);
        assert!((curves.model_percent[0] - 100.0).abs() < 1e-9);
        assert!((curves.strength_28d - 94.259).abs() < 0.01);
    }

    #[test]
    fn test_eurocode_fallback_in_curves() {
        let curves = MaturityEngine::new().development_curves(&standard(), &[1.0, 2.0, 3.0]);
        assert_eq!(curves.eurocode2_percent[0], 50.0);
        assert_eq!(curves.eurocode2_percent[1], 50.0);
        assert!(curves.eurocode2_percent[2] > 60.0);
    }

    #[test]
    fn test_degenerate_mix_model_curve_is_zero() {
        let mix = MixDesign::new(0.0, 160.0, 0.0, 0.0, 0.0, 1000.0, 750.0, 0.0);
        let curves = MaturityEngine::new().development_curves(&mix, &[7.0, 28.0]);
        assert_eq!(curves.strength_28d, 0.0);
        assert_eq!(curves.model_percent, vec![0.0, 0.0]);
    }

    #[test]
    fn test_progression_filters_by_max_age() {
        let points = MaturityEngine::new().progression(&standard(), 90.0, &CostTable::default());
        let ages: Vec<f64> = points.iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![1.0, 3.0, 7.0, 14.0, 28.0, 56.0, 90.0]);
        assert!((points[4].strength_gain_percent - 100.0).abs() < 1e-9);
        assert!(points[6].compressive_strength > points[4].compressive_strength);
        // GPa, not MPa
        assert!(points[4].elastic_modulus_gpa < 50.0);
    }
}
