// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Input Guardrails
//!
//! Documented operating window of the dashboard inputs. The engines accept
//! anything non-negative; these limits only apply when a caller asks for them.

use crate::error::{Error, Result};
use crate::mix::{MaterialType, MixDesign};
use serde::{Deserialize, Serialize};

/// Curing ages the checked entry points accept: finite and non-negative.
pub fn check_age(age: f64) -> Result<()> {
    if !age.is_finite() || age < 0.0 {
        return Err(Error::InvalidAge(age));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeLimit {
    pub min: f64,
    pub max: f64,
}

impl RangeLimit {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Slider ranges (kg/m³, age in days)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRanges {
    pub cement: RangeLimit,
    pub water: RangeLimit,
    pub slag: RangeLimit,
    pub fly_ash: RangeLimit,
    pub silica_fume: RangeLimit,
    pub coarse_aggregate: RangeLimit,
    pub fine_aggregate: RangeLimit,
    pub superplasticizer: RangeLimit,
    pub age: RangeLimit,
}

impl Default for InputRanges {
    fn default() -> Self {
        InputRanges {
            cement: RangeLimit::new(200.0, 500.0),
            water: RangeLimit::new(120.0, 250.0),
            slag: RangeLimit::new(0.0, 200.0),
            fly_ash: RangeLimit::new(0.0, 150.0),
            silica_fume: RangeLimit::new(0.0, 50.0),
            coarse_aggregate: RangeLimit::new(800.0, 1200.0),
            fine_aggregate: RangeLimit::new(600.0, 900.0),
            superplasticizer: RangeLimit::new(0.0, 20.0),
            age: RangeLimit::new(1.0, 365.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangeViolation {
    pub field: &'static str,
    pub value: f64,
    pub limit: RangeLimit,
}

impl From<RangeViolation> for Error {
    fn from(v: RangeViolation) -> Self {
        Error::OutOfRange {
            field: v.field,
            value: v.value,
            min: v.limit.min,
            max: v.limit.max,
        }
    }
}

impl InputRanges {
    pub fn limit(&self, material: MaterialType) -> RangeLimit {
        match material {
            MaterialType::Cement => self.cement,
            MaterialType::Water => self.water,
            MaterialType::Slag => self.slag,
            MaterialType::FlyAsh => self.fly_ash,
            MaterialType::SilicaFume => self.silica_fume,
            MaterialType::CoarseAggregate => self.coarse_aggregate,
            MaterialType::FineAggregate => self.fine_aggregate,
            MaterialType::Superplasticizer => self.superplasticizer,
        }
    }

    /// Every input outside its window, in field order.
    pub fn check(&self, mix: &MixDesign, age: f64) -> Vec<RangeViolation> {
        let mut violations: Vec<RangeViolation> = mix
            .components()
            .filter_map(|(material, value)| {
                let limit = self.limit(material);
                (!limit.contains(value)).then_some(RangeViolation {
                    field: material.field_name(),
                    value,
                    limit,
                })
            })
            .collect();

        if !self.age.contains(age) {
            violations.push(RangeViolation {
                field: "age",
                value: age,
                limit: self.age,
            });
        }
        violations
    }

    /// Fails on the first violation.
    pub fn enforce(&self, mix: &MixDesign, age: f64) -> Result<()> {
        match self.check(mix, age).into_iter().next() {
            Some(violation) => Err(violation.into()),
            None => Ok(()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let limits = MaterialType::ALL
            .iter()
            .map(|&m| (m.field_name(), self.limit(m)))
            .chain(std::iter::once(("age", self.age)));
        for (field, limit) in limits {
            // NaN bounds fail this too
            let ordered = limit.min <= limit.max;
            if !ordered {
                return Err(Error::Config(format!(
                    "range for {} is inverted: [{}, {}]",
                    field, limit.min, limit.max
                )));
            }
        }
        Ok(())
    }
}
