// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// ElasticEngine: stiffness and ultrasonic pulse velocity from strength and
// aggregate content.

use crate::formulas::{aci_elastic_modulus_mpa, clamp_range, REFERENCE_AGGREGATE_MASS};
use crate::mix::MixDesign;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Elastic modulus bounds (MPa)
pub const MODULUS_RANGE: (f64, f64) = (15_000.0, 50_000.0);
/// UPV bounds (m/s)
pub const UPV_RANGE: (f64, f64) = (3_000.0, 5_000.0);

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElasticResult {
    pub density_factor: f64,
    pub unclamped_modulus: f64, // MPa
    pub elastic_modulus: f64,   // MPa, clamped
    pub unclamped_upv: f64,     // m/s
    pub upv: f64,               // m/s, clamped
}

#[wasm_bindgen]
pub struct ElasticEngine;

#[wasm_bindgen]
impl ElasticEngine {
    /// (coarse + fine aggregate) / 1800
    pub fn density_factor(mix: &MixDesign) -> f64 {
        mix.total_aggregate() / REFERENCE_AGGREGATE_MASS
    }

    /// Modulus and UPV for an already-clamped compressive strength.
    pub fn compute(compressive_strength: f64, density_factor: f64) -> ElasticResult {
        let unclamped_modulus = aci_elastic_modulus_mpa(compressive_strength) * density_factor;
        let unclamped_upv = 3800.0 + 15.0 * compressive_strength.sqrt() + density_factor * 200.0;

        ElasticResult {
            density_factor,
            unclamped_modulus,
            elastic_modulus: clamp_range(unclamped_modulus, MODULUS_RANGE.0, MODULUS_RANGE.1),
            unclamped_upv,
            upv: clamp_range(unclamped_upv, UPV_RANGE.0, UPV_RANGE.1),
        }
    }

    pub fn upv_quality(upv: f64) -> UpvQuality {
        if upv > 4500.0 {
            UpvQuality::Excellent
        } else if upv > 4000.0 {
            UpvQuality::Good
        } else {
            UpvQuality::Fair
        }
    }
}

/// Concrete quality grade read off the pulse velocity.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpvQuality {
    Fair = 0,
    Good = 1,
    Excellent = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_factor() {
        let mix = MixDesign::new(400.0, 160.0, 0.0, 0.0, 40.0, 1000.0, 800.0, 12.0);
        assert_eq!(ElasticEngine::density_factor(&mix), 1.0);
    }

    #[test]
    fn test_modulus_scaled_by_density() {
        // 4700 × sqrt(64) × 0.9 = 33 840 MPa
        let r = ElasticEngine::compute(64.0, 0.9);
        assert!((r.elastic_modulus - 33_840.0).abs() < 1e-6);
        assert_eq!(r.elastic_modulus, r.unclamped_modulus);
    }

    #[test]
    fn test_modulus_floor() {
        // Lean aggregate drags the modulus under 15 GPa
        let r = ElasticEngine::compute(16.0, 0.5);
        assert!(r.unclamped_modulus < 15_000.0);
        assert_eq!(r.elastic_modulus, 15_000.0);
    }

    #[test]
    fn test_upv_formula() {
        // 3800 + 15 × 10 + 200 × 0.9722 = 4144.44
        let r = ElasticEngine::compute(100.0, 1750.0 / 1800.0);
        assert!((r.upv - 4144.444).abs() < 0.01, "got {}", r.upv);
    }

    #[test]
    fn test_upv_quality_thresholds() {
        assert_eq!(ElasticEngine::upv_quality(4600.0), UpvQuality::Excellent);
        assert_eq!(ElasticEngine::upv_quality(4500.0), UpvQuality::Good);
        assert_eq!(ElasticEngine::upv_quality(4000.0), UpvQuality::Fair);
    }
}
