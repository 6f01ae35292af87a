// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Empirical Formulas for UHPC Property Estimation
//!
//! Pure scalar functions. Every engine in `science` is assembled from these,
//! so the coefficients live in exactly one place.
//!
//! References:
//! - Abrams (1918): water/binder strength law (power-law form used here)
//! - ACI 318: Elastic modulus E = 4700·sqrt(f'c)
//! - ACI 209R-92: Strength development with time
//! - EN 1992-1-1 (Eurocode 2) §3.1.2: Strength development coefficient

use wasm_bindgen::prelude::*;

/// Reference curing age in days. The age factor is anchored to 1 here.
pub const REFERENCE_AGE_DAYS: f64 = 28.0;

/// Normalizing aggregate mass (kg/m³) for the density factor.
pub const REFERENCE_AGGREGATE_MASS: f64 = 1800.0;

/// Eurocode 2 value returned below `EUROCODE_MIN_AGE_DAYS`.
pub const EUROCODE_EARLY_AGE_PERCENT: f64 = 50.0;

/// Youngest age (days) the Eurocode 2 curve is evaluated at.
pub const EUROCODE_MIN_AGE_DAYS: f64 = 3.0;

// ============================================================================
// GENERAL
// ============================================================================

/// Range clipping: `max(lower, min(upper, x))`.
///
/// Written out rather than `f64::clamp` so an inverted range never panics.
#[wasm_bindgen]
pub fn clamp_range(x: f64, lower: f64, upper: f64) -> f64 {
    lower.max(upper.min(x))
}

// ============================================================================
// STRENGTH MODELS
// ============================================================================

/// Logarithmic age factor normalized so that 28 days gives exactly 1.
///
/// age_factor = ln(age + 1) / ln(29) for age > 0, otherwise 1.
#[wasm_bindgen]
pub fn log_age_factor(age_days: f64) -> f64 {
    if age_days > 0.0 {
        (age_days + 1.0).ln() / (REFERENCE_AGE_DAYS + 1.0).ln()
    } else {
        1.0
    }
}

/// Binder-interaction multiplier `1 + coefficient × (mass / total_binder)`.
///
/// Falls back to 1 when there is no binder to normalize against.
#[wasm_bindgen]
pub fn binder_interaction_factor(coefficient: f64, mass: f64, total_binder: f64) -> f64 {
    if total_binder > 0.0 {
        1.0 + coefficient * (mass / total_binder)
    } else {
        1.0
    }
}

/// Power-law generalization of Abrams' law
///
/// f_base = 40 × (binder / water)^0.7
///
/// # Returns
/// Base compressive strength in MPa, 0 for non-positive water
#[wasm_bindgen]
pub fn abrams_power_strength(total_binder: f64, water: f64) -> f64 {
    if water <= 0.0 {
        return 0.0;
    }
    40.0 * (total_binder / water).powf(0.7)
}

/// ACI 318 Elastic Modulus
///
/// E = 4700 × sqrt(f_c) MPa
///
/// # Returns
/// Elastic modulus in MPa (0 for non-positive strength)
#[wasm_bindgen]
pub fn aci_elastic_modulus_mpa(fc: f64) -> f64 {
    if fc <= 0.0 {
        return 0.0;
    }
    4700.0 * fc.sqrt()
}

// ============================================================================
// STRENGTH DEVELOPMENT (LITERATURE CURVES)
// ============================================================================

/// ACI 209R-92 moist-cured Type I cement curve, as % of 28-day strength
///
/// percent = 100 × t / (4.0 + 0.85 × t)
#[wasm_bindgen]
pub fn aci209_percent(age_days: f64) -> f64 {
    100.0 * age_days / (4.0 + 0.85 * age_days)
}

/// Eurocode 2 strength development, as % of 28-day strength
///
/// percent = 100 × exp(s × (1 − sqrt(28 / t))) with s = 0.2 (class R cement).
/// Below 3 days the curve is replaced by a flat 50 %.
#[wasm_bindgen]
pub fn eurocode2_percent(age_days: f64) -> f64 {
    if age_days >= EUROCODE_MIN_AGE_DAYS {
        100.0 * (0.2 * (1.0 - (REFERENCE_AGE_DAYS / age_days).sqrt())).exp()
    } else {
        EUROCODE_EARLY_AGE_PERCENT
    }
}

// ============================================================================
// TESTS
// ============================================================================
