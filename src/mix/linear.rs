// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Input schema of the linear-coefficient model.
///
/// Not interchangeable with `MixDesign`: it has no SCMs or
/// split aggregates, adds fibres and water reducer, and carries its own age.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearMixDesign {
    pub cement: f64,
    #[serde(alias = "silicaFume")]
    pub silica_fume: f64,
    #[serde(alias = "superPlasticizer")]
    pub super_plasticizer: f64,
    #[serde(alias = "waterReducer")]
    pub water_reducer: f64,
    #[serde(alias = "steelFibers")]
    pub steel_fibers: f64,
    pub aggregate: f64,
    pub water: f64,
    /// Curing age in days, must be > 0
    pub age: f64,
}

/// Fixed sample embedded in the generated report.
pub const REPORT_SAMPLE: LinearMixDesign = LinearMixDesign {
    cement: 800.0,
    silica_fume: 150.0,
    super_plasticizer: 25.0,
    water_reducer: 15.0,
    steel_fibers: 150.0,
    aggregate: 1800.0,
    water: 180.0,
    age: 28.0,
};

impl Default for LinearMixDesign {
    fn default() -> Self {
        REPORT_SAMPLE
    }
}

#[wasm_bindgen]
impl LinearMixDesign {
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cement: f64,
        silica_fume: f64,
        super_plasticizer: f64,
        water_reducer: f64,
        steel_fibers: f64,
        aggregate: f64,
        water: f64,
        age: f64,
    ) -> LinearMixDesign {
        LinearMixDesign {
            cement,
            silica_fume,
            super_plasticizer,
            water_reducer,
            steel_fibers,
            aggregate,
            water,
            age,
        }
    }
}

impl LinearMixDesign {
    /// Masses must be finite and non-negative; age must be finite and > 0
    /// because the model takes `ln(age + 1)` only for positive ages.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("cement", self.cement),
            ("silica_fume", self.silica_fume),
            ("super_plasticizer", self.super_plasticizer),
            ("water_reducer", self.water_reducer),
            ("steel_fibers", self.steel_fibers),
            ("aggregate", self.aggregate),
            ("water", self.water),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidQuantity { field, value });
            }
        }
        if !self.age.is_finite() || self.age <= 0.0 {
            return Err(Error::InvalidAge(self.age));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<LinearMixDesign> {
        Ok(serde_json::from_str(json)?)
    }
}
