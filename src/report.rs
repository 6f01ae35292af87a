// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Data behind the static HTML report.
//!
//! Only the sample prediction is computed. The comparison bars are fixed
//! illustrative figures and the age curve is a generic log trend, not the
//! output of either model.

use crate::models::{LinearCoefficientModel, LinearPropertyEstimate};
use crate::mix::{LinearMixDesign, REPORT_SAMPLE};
use crate::science::cost::LinearCostTable;
use crate::science::maturity::KEY_AGES;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

/// Standard deviation (MPa) of the optional noise on the age curve.
pub const AGE_CURVE_NOISE_MPA: f64 = 2.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonBar {
    pub name: &'static str,
    pub compressive_mpa: f64,
    pub tensile_mpa: f64,
    pub cost: f64,
}

pub const COMPARISON_BARS: [ComparisonBar; 3] = [
    ComparisonBar {
        name: "Standard UHPC",
        compressive_mpa: 85.0,
        tensile_mpa: 8.5,
        cost: 650.0,
    },
    ComparisonBar {
        name: "Slag Enhanced",
        compressive_mpa: 78.0,
        tensile_mpa: 7.8,
        cost: 580.0,
    },
    ComparisonBar {
        name: "Fly Ash Optimized",
        compressive_mpa: 82.0,
        tensile_mpa: 8.2,
        cost: 620.0,
    },
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgeCurvePoint {
    pub age: f64,
    pub strength_mpa: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportData {
    pub sample_mix: LinearMixDesign,
    pub sample_prediction: LinearPropertyEstimate, // rounded to 2 dp
    pub comparison: Vec<ComparisonBar>,
    pub age_curve: Vec<AgeCurvePoint>,
}

/// strength = 40 + 35 ln(age), with Normal(0, 2) noise when `seed` is given.
pub fn age_curve(seed: Option<u64>) -> Vec<AgeCurvePoint> {
    let mut noise = seed.and_then(|s| {
        Normal::new(0.0, AGE_CURVE_NOISE_MPA)
            .ok()
            .map(|normal| (normal, StdRng::seed_from_u64(s)))
    });

    KEY_AGES
        .iter()
        .map(|&age| {
            let jitter = match noise.as_mut() {
                Some((normal, rng)) => normal.sample(rng),
                None => 0.0,
            };
            AgeCurvePoint {
                age,
                strength_mpa: 40.0 + 35.0 * age.ln() + jitter,
            }
        })
        .collect()
}

impl ReportData {
    pub fn build(costs: &LinearCostTable, seed: Option<u64>) -> ReportData {
        let sample_prediction =
            LinearCoefficientModel::predict_with(&REPORT_SAMPLE, costs).rounded();
        ReportData {
            sample_mix: REPORT_SAMPLE,
            sample_prediction,
            comparison: COMPARISON_BARS.to_vec(),
            age_curve: age_curve(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_prediction_is_rounded() {
        let report = ReportData::build(&LinearCostTable::default(), None);
        assert_eq!(report.sample_prediction.compressive_strength_mpa, 1025.84);
        assert_eq!(report.sample_prediction.cost, 625.5);
        assert_eq!(report.comparison[1].name, "Slag Enhanced");
    }

    #[test]
    fn test_noise_free_curve() {
        let curve = age_curve(None);
        assert_eq!(curve.len(), KEY_AGES.len());
        // ln(1) = 0
        assert_eq!(curve[0].strength_mpa, 40.0);
        assert!(curve.windows(2).all(|w| w[1].strength_mpa > w[0].strength_mpa));
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let a = age_curve(Some(42));
        let b = age_curve(Some(42));
        assert_eq!(a, b);

        let clean = age_curve(None);
        let max_dev = a
            .iter()
            .zip(&clean)
            .map(|(n, c)| (n.strength_mpa - c.strength_mpa).abs())
            .fold(0.0, f64::max);
        assert!(max_dev > 0.0);
        // ten sigma
        assert!(max_dev < 20.0);
    }

    #[test]
    fn test_report_serializes() {
        let report = ReportData::build(&LinearCostTable::default(), Some(7));
        let value = serde_json::to_value(report).unwrap();
        assert_eq!(value["age_curve"].as_array().unwrap().len(), 9);
        assert_eq!(value["sample_mix"]["steel_fibers"], 150.0);
    }
}
