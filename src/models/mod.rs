// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Prediction models
//!
//! Two independent models with incompatible input schemas and units. They
//! are never blended; a request names exactly one.

pub mod linear;

pub use linear::{round2, LinearCoefficientModel, LinearPropertyEstimate};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::mix::{LinearMixDesign, MixDesign};
use crate::property_kernel::{PropertyEstimate, PropertyKernel};
use serde::{Deserialize, Serialize};

/// A model selection together with the inputs that model needs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum PredictionModel {
    BinderFactor { mix: MixDesign, age: f64 },
    LinearCoefficient { mix: LinearMixDesign },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", content = "estimate", rename_all = "snake_case")]
pub enum Prediction {
    BinderFactor(PropertyEstimate),
    LinearCoefficient(LinearPropertyEstimate),
}

impl Prediction {
    /// Compressive strength in MPa, whichever model produced it.
    pub fn compressive_strength(&self) -> f64 {
        match self {
            Prediction::BinderFactor(e) => e.compressive_strength,
            Prediction::LinearCoefficient(e) => e.compressive_strength_mpa,
        }
    }

    pub fn cost(&self) -> f64 {
        match self {
            Prediction::BinderFactor(e) => e.cost,
            Prediction::LinearCoefficient(e) => e.cost,
        }
    }
}

impl PredictionModel {
    pub fn predict(&self) -> Prediction {
        match self {
            PredictionModel::BinderFactor { mix, age } => {
                Prediction::BinderFactor(PropertyKernel::predict(mix, *age))
            }
            PredictionModel::LinearCoefficient { mix } => {
                Prediction::LinearCoefficient(LinearCoefficientModel::predict(mix))
            }
        }
    }

    pub fn try_predict(&self, config: &EngineConfig) -> Result<Prediction> {
        let prediction = match self {
            PredictionModel::BinderFactor { mix, age } => {
                Prediction::BinderFactor(PropertyKernel::try_predict(mix, *age, config)?)
            }
            PredictionModel::LinearCoefficient { mix } => Prediction::LinearCoefficient(
                LinearCoefficientModel::try_predict(mix, &config.linear_cost)?,
            ),
        };
        Ok(prediction)
    }

    pub fn from_json(json: &str) -> Result<PredictionModel> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mix::{presets::STANDARD_UHPC, REPORT_SAMPLE};

    #[test]
    fn test_dispatch_binder_factor() {
        let model = PredictionModel::BinderFactor {
            mix: STANDARD_UHPC.mix,
            age: 28.0,
        };
        match model.predict() {
            Prediction::BinderFactor(e) => assert!((e.compressive_strength - 94.259).abs() < 0.01),
            other => panic!("wrong model: {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_linear() {
        let model = PredictionModel::LinearCoefficient { mix: REPORT_SAMPLE };
        let p = model.try_predict(&EngineConfig::default()).unwrap();
        assert!(matches!(p, Prediction::LinearCoefficient(_)));
        assert_eq!(round2(p.cost()), 625.5);
    }

    #[test]
    fn test_tagged_json() {
        let model = PredictionModel::from_json(
            r#"{"model":"binder_factor","mix":{"cement":400,"water":160},"age":7}"#,
        )
        .unwrap();
        assert!(matches!(model, PredictionModel::BinderFactor { age, .. } if age == 7.0));

        let out = serde_json::to_value(model.predict()).unwrap();
        assert_eq!(out["model"], "binder_factor");
        assert!(out["estimate"]["compressive_strength"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_checked_linear_rejects_zero_age() {
        let model = PredictionModel::LinearCoefficient {
            mix: LinearMixDesign {
                age: 0.0,
                ..REPORT_SAMPLE
            },
        };
        assert!(model.try_predict(&EngineConfig::default()).is_err());
    }
}
