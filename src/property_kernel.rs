// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// PropertyKernel: Binder-Factor Property Prediction
//
// Maps a mix design and curing age to compressive strength, tensile
// strength, elastic modulus, UPV and cost. Pure and stateless; every call
// is independent.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::guardrails::check_age;
use crate::mix::MixDesign;
use crate::science::{
    cost::{CostEngine, CostTable},
    elastic::{ElasticEngine, UpvQuality, MODULUS_RANGE, UPV_RANGE},
    strength::{PerformanceClass, StrengthEngine, COMPRESSIVE_RANGE, TENSILE_RANGE},
    sustainability::SustainabilityEngine,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Output of the binder-factor model.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyEstimate {
    pub compressive_strength: f64, // MPa
    pub tensile_strength: f64,     // MPa
    pub elastic_modulus: f64,      // MPa
    pub upv: f64,                  // m/s
    pub cost: f64,                 // currency / m³
}

#[wasm_bindgen]
impl PropertyEstimate {
    /// MPa per currency unit; 0 when the mix costs nothing.
    pub fn strength_per_cost(&self) -> f64 {
        if self.cost > 0.0 {
            self.compressive_strength / self.cost
        } else {
            0.0
        }
    }

    /// Tensile as a percentage of compressive strength.
    pub fn tensile_ratio_percent(&self) -> f64 {
        if self.compressive_strength > 0.0 {
            self.tensile_strength / self.compressive_strength * 100.0
        } else {
            0.0
        }
    }
}

impl PropertyEstimate {
    pub const ZERO: PropertyEstimate = PropertyEstimate {
        compressive_strength: 0.0,
        tensile_strength: 0.0,
        elastic_modulus: 0.0,
        upv: 0.0,
        cost: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationEvent {
    fn new(topic: &str, message: String, severity: Severity) -> Self {
        Self {
            topic: topic.to_string(),
            message,
            severity,
        }
    }
}

/// Derived descriptors shown next to the estimate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixAnalysis {
    pub total_binder: f64,
    pub water_cement_ratio: f64,
    pub water_binder_ratio: f64,
    pub scm_percentage: f64,
    pub sustainability_score: f64, // 0-10
    pub performance_class: PerformanceClass,
    pub upv_quality: UpvQuality,
    pub tensile_ratio_percent: f64,
    pub strength_per_cost: f64,
    pub applications: Vec<String>,
}

impl MixAnalysis {
    pub fn new(mix: &MixDesign, estimate: &PropertyEstimate) -> Self {
        let performance_class = PerformanceClass::from_strength(estimate.compressive_strength);
        MixAnalysis {
            total_binder: mix.total_binder(),
            water_cement_ratio: mix.water_cement_ratio(),
            water_binder_ratio: mix.water_binder_ratio(),
            scm_percentage: SustainabilityEngine::scm_percentage(mix),
            sustainability_score: SustainabilityEngine::score(mix),
            performance_class,
            upv_quality: ElasticEngine::upv_quality(estimate.upv),
            tensile_ratio_percent: estimate.tensile_ratio_percent(),
            strength_per_cost: estimate.strength_per_cost(),
            applications: performance_class
                .applications()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyReport {
    pub age: f64,
    pub mix: MixDesign,
    pub estimate: PropertyEstimate,
    pub analysis: MixAnalysis,
    pub events: Vec<ValidationEvent>,
}

#[wasm_bindgen]
pub struct PropertyKernel;

#[wasm_bindgen]
impl PropertyKernel {
    /// Predict with the default unit-cost table.
    pub fn predict(mix: &MixDesign, age: f64) -> PropertyEstimate {
        Self::predict_with(mix, age, &CostTable::default())
    }

    /// JSON in, JSON out: `{"estimate": ..., "analysis": ..., "events": [...]}`
    /// or `{"error": "..."}`. The front end calls this once per slider change.
    pub fn compute_json(mix_json: &str, age: f64) -> String {
        let response = MixDesign::from_json(mix_json)
            .and_then(|mix| Self::compute(&mix, age, &EngineConfig::default()));

        let encoded = match response {
            Ok(report) => serde_json::to_string(&report),
            Err(e) => serde_json::to_string(&serde_json::json!({ "error": e.to_string() })),
        };
        encoded.unwrap_or_default()
    }
}

/// Pure Rust entry points (non-WASM)
impl PropertyKernel {
    /// Core binder-factor model.
    ///
    /// Never fails: water <= 0 or cement <= 0 gives an all-zero estimate,
    /// and every other non-negative input lands inside the clamp ranges.
    /// Age <= 0 uses an age factor of 1; negative ages are the caller's
    /// responsibility (see `try_predict`).
    pub fn predict_with(mix: &MixDesign, age: f64, costs: &CostTable) -> PropertyEstimate {
        if mix.is_degenerate() {
            tracing::debug!(
                cement = mix.cement,
                water = mix.water,
                "degenerate mix, returning zero estimate"
            );
            return PropertyEstimate::ZERO;
        }

        let strength = StrengthEngine::compute(mix, age);
        let elastic = ElasticEngine::compute(
            strength.compressive_strength,
            ElasticEngine::density_factor(mix),
        );

        PropertyEstimate {
            compressive_strength: strength.compressive_strength,
            tensile_strength: strength.tensile_strength,
            elastic_modulus: elastic.elastic_modulus,
            upv: elastic.upv,
            cost: CostEngine::compute(mix, costs),
        }
    }

    /// Checked boundary: rejects negative/non-finite masses and ages, and
    /// out-of-window inputs when `enforce_ranges` is set.
    pub fn try_predict(
        mix: &MixDesign,
        age: f64,
        config: &EngineConfig,
    ) -> Result<PropertyEstimate> {
        Self::check_inputs(mix, age, config)?;
        Ok(Self::predict_with(mix, age, &config.cost))
    }

    /// Estimate plus analysis and the events a reviewer should see: clamps
    /// that engaged, degenerate input, inputs outside the slider ranges.
    pub fn compute(mix: &MixDesign, age: f64, config: &EngineConfig) -> Result<PropertyReport> {
        Self::check_inputs(mix, age, config)?;

        let estimate = Self::predict_with(mix, age, &config.cost);
        let mut events = Vec::new();

        for violation in config.ranges.check(mix, age) {
            events.push(ValidationEvent::new(
                "INPUT.RANGE",
                format!(
                    "{} = {} outside [{}, {}]",
                    violation.field, violation.value, violation.limit.min, violation.limit.max
                ),
                Severity::Warning,
            ));
        }

        if mix.is_degenerate() {
            events.push(ValidationEvent::new(
                "PROPERTY.INPUT",
                "No cement or no water: all properties reported as zero".to_string(),
                Severity::Critical,
            ));
        } else {
            Self::push_clamp_events(mix, age, &mut events);
        }

        Ok(PropertyReport {
            age,
            mix: *mix,
            analysis: MixAnalysis::new(mix, &estimate),
            estimate,
            events,
        })
    }

    fn check_inputs(mix: &MixDesign, age: f64, config: &EngineConfig) -> Result<()> {
        mix.validate()?;
        check_age(age)?;
        if config.enforce_ranges {
            config.ranges.enforce(mix, age)?;
        }
        Ok(())
    }

    fn push_clamp_events(mix: &MixDesign, age: f64, events: &mut Vec<ValidationEvent>) {
        let strength = StrengthEngine::compute(mix, age);
        let elastic = ElasticEngine::compute(
            strength.compressive_strength,
            ElasticEngine::density_factor(mix),
        );

        let checks = [
            (
                "PROPERTY.STRENGTH",
                "Compressive strength",
                "MPa",
                strength.unclamped_compressive,
                strength.compressive_strength,
                COMPRESSIVE_RANGE,
            ),
            (
                "PROPERTY.TENSILE",
                "Tensile strength",
                "MPa",
                strength.unclamped_tensile,
                strength.tensile_strength,
                TENSILE_RANGE,
            ),
            (
                "PROPERTY.MODULUS",
                "Elastic modulus",
                "MPa",
                elastic.unclamped_modulus,
                elastic.elastic_modulus,
                MODULUS_RANGE,
            ),
            (
                "PROPERTY.UPV",
                "Pulse velocity",
                "m/s",
                elastic.unclamped_upv,
                elastic.upv,
                UPV_RANGE,
            ),
        ];

        for (topic, label, unit, raw, clamped, (lo, hi)) in checks {
            if raw != clamped {
                tracing::debug!(topic, raw, clamped, "clamp engaged");
                events.push(ValidationEvent::new(
                    topic,
                    format!(
                        "{} {:.1} {} clamped to {:.1} {} (range {}-{})",
                        label, raw, unit, clamped, unit, lo, hi
                    ),
                    Severity::Info,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::mix::presets::STANDARD_UHPC;

    #[test]
    fn test_predict_standard_uhpc() {
        let est = PropertyKernel::predict(&STANDARD_UHPC.mix, 28.0);
        assert!((est.compressive_strength - 94.259).abs() < 0.01);
        // 94.259 × (0.08 + 0.028) = 10.18
        assert!((est.tensile_strength - 10.18).abs() < 0.01);
        assert!((est.cost - 135.41).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_estimate_is_zero() {
        let mix = STANDARD_UHPC.mix.with(crate::mix::MaterialType::Water, 0.0);
        assert_eq!(PropertyKernel::predict(&mix, 28.0), PropertyEstimate::ZERO);
    }

    #[test]
    fn test_try_predict_rejects_negative_age() {
        let err = PropertyKernel::try_predict(&STANDARD_UHPC.mix, -1.0, &EngineConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAge(a) if a == -1.0));
    }

    #[test]
    fn test_try_predict_enforces_ranges_when_asked() {
        let config = EngineConfig {
            enforce_ranges: true,
            ..EngineConfig::default()
        };
        assert!(PropertyKernel::try_predict(&STANDARD_UHPC.mix, 28.0, &config).is_ok());
        assert!(matches!(
            PropertyKernel::try_predict(&STANDARD_UHPC.mix, 400.0, &config),
            Err(Error::OutOfRange { field: "age", .. })
        ));
    }

    #[test]
    fn test_compute_reports_clamp_event() {
        crate::logging::init_test();
        let report = PropertyKernel::compute(&STANDARD_UHPC.mix, 365.0, &EngineConfig::default())
            .unwrap();
        assert_eq!(report.estimate.compressive_strength, 120.0);
        let topics: Vec<&str> = report.events.iter().map(|e| e.topic.as_str()).collect();
        assert!(topics.contains(&"PROPERTY.STRENGTH"));
        assert!(topics.iter().all(|t| *t != "INPUT.RANGE"));
    }

    #[test]
    fn test_compute_reports_degenerate_input() {
        let mix = STANDARD_UHPC.mix.with(crate::mix::MaterialType::Cement, 0.0);
        let report = PropertyKernel::compute(&mix, 28.0, &EngineConfig::default()).unwrap();
        assert_eq!(report.estimate, PropertyEstimate::ZERO);
        assert!(report
            .events
            .iter()
            .any(|e| e.topic == "PROPERTY.INPUT" && e.severity == Severity::Critical));
        // cement 0 is also below the 200 kg/m³ slider minimum
        assert!(report.events.iter().any(|e| e.topic == "INPUT.RANGE"));
    }

    #[test]
    fn test_analysis_fields() {
        let report = PropertyKernel::compute(&STANDARD_UHPC.mix, 28.0, &EngineConfig::default())
            .unwrap();
        let a = &report.analysis;
        assert_eq!(a.total_binder, 440.0);
        assert!((a.water_cement_ratio - 0.4).abs() < 1e-12);
        assert_eq!(a.scm_percentage, 0.0);
        assert_eq!(a.performance_class, PerformanceClass::VeryHigh);
        assert_eq!(a.upv_quality, UpvQuality::Good);
        assert_eq!(a.applications[0], "Bridge Structures");
    }

    #[test]
    fn test_compute_json_round_trip() {
        let json = PropertyKernel::compute_json(
            r#"{"cement":400,"water":160,"silica_fume":40,"coarse_agg":1000,"fine_agg":750,"superplast":12}"#,
            28.0,
        );
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let fc = value["estimate"]["compressive_strength"].as_f64().unwrap();
        assert!((fc - 94.259).abs() < 0.01);
        assert_eq!(value["analysis"]["performance_class"], "VeryHigh");
    }

    #[test]
    fn test_compute_json_reports_errors() {
        let json = PropertyKernel::compute_json("{not json", 28.0);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["error"].as_str().unwrap().starts_with("JSON error"));

        let json = PropertyKernel::compute_json(r#"{"cement":-1,"water":160}"#, 28.0);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["error"].as_str().unwrap().contains("cement"));
    }
}
