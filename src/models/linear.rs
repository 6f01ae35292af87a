// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// LinearCoefficientModel: additive regression used by the static report.
// Its units differ from the binder-factor model (GPa, km/s) and its
// outputs are not clamped.

use crate::error::Result;
use crate::mix::LinearMixDesign;
use crate::science::cost::{CostEngine, LinearCostTable};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearPropertyEstimate {
    pub compressive_strength_mpa: f64,
    pub tensile_strength_mpa: f64,
    pub elastic_modulus_gpa: f64,
    pub upv_km_s: f64,
    pub cost: f64,
}

impl LinearPropertyEstimate {
    /// Every field rounded to two decimals, as shown in the report.
    pub fn rounded(&self) -> LinearPropertyEstimate {
        LinearPropertyEstimate {
            compressive_strength_mpa: round2(self.compressive_strength_mpa),
            tensile_strength_mpa: round2(self.tensile_strength_mpa),
            elastic_modulus_gpa: round2(self.elastic_modulus_gpa),
            upv_km_s: round2(self.upv_km_s),
            cost: round2(self.cost),
        }
    }
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[wasm_bindgen]
pub struct LinearCoefficientModel;

#[wasm_bindgen]
impl LinearCoefficientModel {
    /// Unchecked prediction. Callers outside the crate should prefer
    /// `try_predict`; age <= -1 makes the log term undefined.
    pub fn predict(mix: &LinearMixDesign) -> LinearPropertyEstimate {
        Self::predict_with(mix, &LinearCostTable::default())
    }

    pub fn compressive_strength(mix: &LinearMixDesign) -> f64 {
        0.45 * mix.cement
            + 0.8 * mix.silica_fume
            + 15.0 * mix.super_plasticizer
            + 8.0 * mix.water_reducer
            + 0.3 * mix.steel_fibers
            - 0.2 * mix.water
            + 5.0 * (mix.age + 1.0).ln()
            + 25.0
    }
}

impl LinearCoefficientModel {
    pub fn predict_with(mix: &LinearMixDesign, costs: &LinearCostTable) -> LinearPropertyEstimate {
        let fc = Self::compressive_strength(mix);
        let fibers = mix.steel_fibers;

        LinearPropertyEstimate {
            compressive_strength_mpa: fc,
            tensile_strength_mpa: 0.08 * fc + 0.02 * fibers + 2.0,
            elastic_modulus_gpa: 25.0 + 0.15 * fc + 0.001 * fibers,
            upv_km_s: 3.8 + 0.01 * fc + 0.0001 * fibers,
            cost: CostEngine::compute_linear(mix, costs),
        }
    }

    pub fn try_predict(
        mix: &LinearMixDesign,
        costs: &LinearCostTable,
    ) -> Result<LinearPropertyEstimate> {
        mix.validate()?;
        Ok(Self::predict_with(mix, costs))
    }
}
