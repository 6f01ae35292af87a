// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// UHPC Core: property prediction and strength development for
// Ultra-High Performance Concrete mixes.
//

pub mod cache;
pub mod config;
pub mod error;
pub mod formulas;
pub mod guardrails;
pub mod logging;
pub mod mix;
pub mod models;
pub mod optimization;
pub mod property_kernel;
pub mod report;
pub mod science;
#[cfg(test)]
pub mod tests_properties;

// Re-export core types
pub use cache::PredictionCache;
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use mix::{LinearMixDesign, MaterialType, MixDesign};
pub use models::{LinearCoefficientModel, LinearPropertyEstimate, Prediction, PredictionModel};
pub use property_kernel::{PropertyEstimate, PropertyKernel, PropertyReport};
pub use science::maturity::MaturityEngine;
