// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Side-by-side evaluation of named mixes at a common age.

use crate::error::Result;
use crate::guardrails::check_age;
use crate::mix::{MixDesign, MixPreset};
use crate::property_kernel::{PropertyEstimate, PropertyKernel};
use crate::science::cost::CostTable;
use crate::science::sustainability::SustainabilityEngine;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use wasm_bindgen::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub mix: MixDesign,
}

impl From<&MixPreset> for Candidate {
    fn from(preset: &MixPreset) -> Self {
        Candidate {
            name: preset.name.to_string(),
            mix: preset.mix,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBy {
    #[default]
    CompressiveStrength,
    StrengthPerCost,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub rank: usize, // 1-based
    pub name: String,
    pub mix: MixDesign,
    pub estimate: PropertyEstimate,
    pub water_cement_ratio: f64,
    pub scm_percentage: f64,
    pub strength_per_cost: f64,
}

impl ComparisonRow {
    fn score(&self, rank_by: RankBy) -> f64 {
        match rank_by {
            RankBy::CompressiveStrength => self.estimate.compressive_strength,
            RankBy::StrengthPerCost => self.strength_per_cost,
        }
    }
}

/// Evaluate every candidate at `target_age` and rank them, best first.
///
/// The sort is stable, so equal scores keep their input order.
pub fn compare(
    candidates: &[Candidate],
    target_age: f64,
    rank_by: RankBy,
    costs: &CostTable,
) -> Vec<ComparisonRow> {
    let mut rows: Vec<ComparisonRow> = candidates
        .iter()
        .map(|c| {
            let estimate = PropertyKernel::predict_with(&c.mix, target_age, costs);
            ComparisonRow {
                rank: 0,
                name: c.name.clone(),
                mix: c.mix,
                estimate,
                water_cement_ratio: c.mix.water_cement_ratio(),
                scm_percentage: SustainabilityEngine::scm_percentage(&c.mix),
                strength_per_cost: estimate.strength_per_cost(),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.score(rank_by)
            .partial_cmp(&a.score(rank_by))
            .unwrap_or(Ordering::Equal)
    });
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }

    tracing::debug!(
        candidates = rows.len(),
        ?rank_by,
        target_age,
        "ranked mix comparison"
    );
    rows
}

/// `compare` behind the checked boundary: every mix must validate and the
/// age must be finite and non-negative.
pub fn try_compare(
    candidates: &[Candidate],
    target_age: f64,
    rank_by: RankBy,
    costs: &CostTable,
) -> Result<Vec<ComparisonRow>> {
    check_age(target_age)?;
    for candidate in candidates {
        candidate.mix.validate()?;
    }
    Ok(compare(candidates, target_age, rank_by, costs))
}

#[wasm_bindgen]
pub struct MixComparator;

#[wasm_bindgen]
impl MixComparator {
    /// Args:
    /// - candidates: JSON array of `{name, mix}`
    /// - target_age: days
    /// - by_cost: rank by strength per cost instead of strength
    ///
    /// Returns a JSON array of ranked rows, `[]` on malformed JSON, an
    /// invalid mass or an invalid age.
    pub fn compare_json(candidates: &str, target_age: f64, by_cost: bool) -> String {
        let candidates: Vec<Candidate> = match serde_json::from_str(candidates) {
            Ok(c) => c,
            Err(_) => return "[]".to_string(),
        };
        let rank_by = if by_cost {
            RankBy::StrengthPerCost
        } else {
            RankBy::CompressiveStrength
        };
        match try_compare(&candidates, target_age, rank_by, &CostTable::default()) {
            Ok(rows) => serde_json::to_string(&rows).unwrap_or_else(|_| "[]".to_string()),
            Err(e) => {
                tracing::debug!(error = %e, "comparison rejected");
                "[]".to_string()
            }
        }
    }
}
