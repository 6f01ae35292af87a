// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::mix::{LinearMixDesign, MaterialType, MixDesign};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Unit costs (currency per kg) for the binder-factor model.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostTable {
    pub cement: f64,
    pub slag: f64,
    pub fly_ash: f64,
    pub silica_fume: f64,
    pub coarse_aggregate: f64,
    pub fine_aggregate: f64,
    pub superplasticizer: f64,
    pub water: f64,
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            cement: 0.12,
            slag: 0.08,
            fly_ash: 0.06,
            silica_fume: 0.8,
            coarse_aggregate: 0.02,
            fine_aggregate: 0.015,
            superplasticizer: 2.0,
            water: 0.001,
        }
    }
}

impl CostTable {
    pub fn unit_cost(&self, material: MaterialType) -> f64 {
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
}

/// Unit costs and fixed overhead for the linear-coefficient model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearCostTable {
    pub cement: f64,
    pub silica_fume: f64,
    pub super_plasticizer: f64,
    pub water_reducer: f64,
    pub steel_fibers: f64,
    pub aggregate: f64,
    /// Fixed per-m³ overhead
    pub base: f64,
}

impl Default for LinearCostTable {
    fn default() -> Self {
        Self {
            cement: 0.12,
            silica_fume: 0.8,
            super_plasticizer: 2.5,
            water_reducer: 1.8,
            steel_fibers: 1.2,
            aggregate: 0.05,
            base: 50.0,
        }
    }
}

#[wasm_bindgen]
pub struct CostEngine;

#[wasm_bindgen]
impl CostEngine {
    /// Material cost per m³. Unclamped; degenerate mixes are handled by the
    /// caller.
    pub fn compute(mix: &MixDesign, table: &CostTable) -> f64 {
        // Summation order follows the published unit-cost table.
        mix.cement * table.cement
            + mix.slag * table.slag
            + mix.fly_ash * table.fly_ash
            + mix.silica_fume * table.silica_fume
            + mix.coarse_aggregate * table.coarse_aggregate
            + mix.fine_aggregate * table.fine_aggregate
            + mix.superplasticizer * table.superplasticizer
            + mix.water * table.water
    }
}

impl CostEngine {
    pub fn compute_linear(mix: &LinearMixDesign, table: &LinearCostTable) -> f64 {
        mix.cement * table.cement
            + mix.silica_fume * table.silica_fume
            + mix.super_plasticizer * table.super_plasticizer
            + mix.water_reducer * table.water_reducer
            + mix.steel_fibers * table.steel_fibers
            + mix.aggregate * table.aggregate
            + table.base
    }

    /// Per-material breakdown, largest contributor first.
    pub fn breakdown(mix: &MixDesign, table: &CostTable) -> Vec<(MaterialType, f64)> {
        let mut items: Vec<(MaterialType, f64)> = mix
            .components()
            .map(|(material, mass)| (material, mass * table.unit_cost(material)))
            .collect();
        items.sort_by(|a, b| b.1.total_cmp(&a.1));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mix::REPORT_SAMPLE;

    #[test]
    fn test_standard_uhpc_cost() {
        // 48 + 32 + 20 + 11.25 + 24 + 0.16 = 135.41
        let mix = MixDesign::new(400.0, 160.0, 0.0, 0.0, 40.0, 1000.0, 750.0, 12.0);
        let cost = CostEngine::compute(&mix, &CostTable::default());
        assert!((cost - 135.41).abs() < 1e-9, "got {}", cost);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let mix = MixDesign::new(300.0, 150.0, 120.0, 80.0, 25.0, 1000.0, 750.0, 8.0);
        let table = CostTable::default();
        let total: f64 = CostEngine::breakdown(&mix, &table).iter().map(|(_, c)| c).sum();
        assert!((total - CostEngine::compute(&mix, &table)).abs() < 1e-9);
        assert_eq!(CostEngine::breakdown(&mix, &table)[0].0, MaterialType::Cement);
    }

    #[test]
    fn test_linear_report_sample_cost() {
        // 96 + 120 + 62.5 + 27 + 180 + 90 + 50 = 625.5
        let cost = CostEngine::compute_linear(&REPORT_SAMPLE, &LinearCostTable::default());
        assert!((cost - 625.5).abs() < 1e-9, "got {}", cost);
    }
}
