// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Memoization of binder-factor predictions.
//!
//! Keys are the exact bit patterns of the nine inputs, so two requests hit
//! the same entry only when every input is identical. A cache is bound to
//! one cost table; build a new one when the table changes.

use crate::mix::MixDesign;
use crate::property_kernel::{PropertyEstimate, PropertyKernel};
use crate::science::cost::CostTable;
use serde::Serialize;
use std::collections::HashMap;

type CacheKey = [u64; 9];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Debug, Default)]
pub struct PredictionCache {
    costs: CostTable,
    entries: HashMap<CacheKey, PropertyEstimate>,
    hits: u64,
    misses: u64,
}

fn key_bits(x: f64) -> u64 {
    // -0.0 and 0.0 predict the same thing
    if x == 0.0 {
        0.0f64.to_bits()
    } else {
        x.to_bits()
    }
}

fn cache_key(mix: &MixDesign, age: f64) -> CacheKey {
    [
        key_bits(mix.cement),
        key_bits(mix.water),
        key_bits(mix.slag),
        key_bits(mix.fly_ash),
        key_bits(mix.silica_fume),
        key_bits(mix.coarse_aggregate),
        key_bits(mix.fine_aggregate),
        key_bits(mix.superplasticizer),
        key_bits(age),
    ]
}

impl PredictionCache {
    pub fn new(costs: CostTable) -> Self {
        Self {
            costs,
            ..Self::default()
        }
    }

    pub fn get_or_compute(&mut self, mix: &MixDesign, age: f64) -> PropertyEstimate {
        let key = cache_key(mix, age);
        if let Some(estimate) = self.entries.get(&key) {
            self.hits += 1;
            return *estimate;
        }

        self.misses += 1;
        let estimate = PropertyKernel::predict_with(mix, age, &self.costs);
        self.entries.insert(key, estimate);
        estimate
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
