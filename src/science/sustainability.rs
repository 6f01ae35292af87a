// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::mix::MixDesign;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct SustainabilityEngine;

#[wasm_bindgen]
impl SustainabilityEngine {
    /// Slag plus fly ash as a percentage of total binder.
    pub fn scm_percentage(mix: &MixDesign) -> f64 {
        let binder = mix.total_binder();
        if binder > 0.0 {
            (mix.slag + mix.fly_ash) / binder * 100.0
        } else {
            0.0
        }
    }

    /// 0-10 score rewarding cement replacement and a low w/c ratio.
    ///
    /// score = min(10, SCM% / 5 + (1 - min(w/c, 0.6)) × 10)
    pub fn score(mix: &MixDesign) -> f64 {
        let scm = Self::scm_percentage(mix);
        let wc = mix.water_cement_ratio().min(0.6);
        (scm / 5.0 + (1.0 - wc) * 10.0).min(10.0)
    }
}
