// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! Property Engine Tests
//!
//! Range, monotonicity and anchoring checks over a sweep of mixes, plus the
//! JSON bridge as the front end calls it.

use crate::config::EngineConfig;
use crate::formulas::{aci209_percent, eurocode2_percent};
use crate::mix::{MaterialType, MixDesign, ALL_PRESETS};
use crate::property_kernel::{PropertyEstimate, PropertyKernel};
use crate::science::maturity::KEY_AGES;
use serde_json::json;

/// Mixes spanning the slider ranges, corners included.
fn sweep() -> Vec<MixDesign> {
    let mut mixes: Vec<MixDesign> = ALL_PRESETS.iter().map(|p| p.mix).collect();
    for &cement in &[200.0, 350.0, 500.0] {
        for &water in &[120.0, 185.0, 250.0] {
            for &scm in &[0.0, 100.0, 200.0] {
                for &sf in &[0.0, 50.0] {
                    for &agg in &[800.0, 1200.0] {
                        mixes.push(MixDesign::new(
                            cement,
                            water,
                            scm,
                            scm * 0.75,
                            sf,
                            agg,
                            agg * 0.75,
                            sf * 0.4,
                        ));
                    }
                }
            }
        }
    }
    mixes
}

fn in_range(x: f64, lo: f64, hi: f64) -> bool {
    x >= lo && x <= hi
}

#[test]
fn test_outputs_stay_in_range() {
    for mix in sweep() {
        for &age in KEY_AGES.iter().chain(&[0.0, 0.5, 1000.0]) {
            let e = PropertyKernel::predict(&mix, age);
            assert!(
                in_range(e.compressive_strength, 10.0, 120.0),
                "{:?} @ {}: {:?}",
                mix,
                age,
                e
            );
            assert!(
                in_range(e.tensile_strength, 1.0, 15.0),
                "{:?} @ {}: {:?}",
                mix,
                age,
                e
            );
            assert!(
                in_range(e.elastic_modulus, 15_000.0, 50_000.0),
                "{:?} @ {}: {:?}",
                mix,
                age,
                e
            );
            assert!(
                in_range(e.upv, 3_000.0, 5_000.0),
                "{:?} @ {}: {:?}",
                mix,
                age,
                e
            );
            assert!(e.cost >= 0.0);
        }
    }
}

#[test]
fn test_degenerate_inputs_give_all_zero() {
    for mix in sweep() {
        for material in [MaterialType::Water, MaterialType::Cement] {
            let broken = mix.with(material, 0.0);
            assert_eq!(PropertyKernel::predict(&broken, 28.0), PropertyEstimate::ZERO);
        }
    }
}

#[test]
fn test_age_anchor_and_monotonicity() {
    for mix in sweep() {
        let mut previous = 0.0;
        for &age in &KEY_AGES {
            let fc = PropertyKernel::predict(&mix, age).compressive_strength;
            assert!(fc >= previous, "{:?}: strength fell at {} days", mix, age);
            previous = fc;
        }
        // age factor is exactly 1 at 28 days; only the clamp can interfere
        let direct = crate::science::strength::StrengthEngine::compute(&mix, 28.0);
        assert_eq!(direct.age_factor, 1.0);
    }
}

#[test]
fn test_unclamped_strength_rises_to_28_days() {
    use crate::science::strength::StrengthEngine;
    for mix in sweep() {
        for age in 1..28 {
            let now = StrengthEngine::compute(&mix, age as f64).unclamped_compressive;
            let next = StrengthEngine::compute(&mix, (age + 1) as f64).unclamped_compressive;
            assert!(next > now, "{:?}: no gain from day {}", mix, age);
        }
    }
}

#[test]
fn test_more_water_never_helps() {
    for mix in sweep() {
        let drier = PropertyKernel::predict(&mix, 28.0).compressive_strength;
        let wetter = PropertyKernel::predict(&mix.with(MaterialType::Water, mix.water + 20.0), 28.0)
            .compressive_strength;
        assert!(wetter <= drier, "{:?}", mix);
    }
}

#[test]
fn test_silica_fume_and_superplasticizer_never_hurt() {
    for mix in sweep() {
        let base = PropertyKernel::predict(&mix, 28.0);
        let more_sf = PropertyKernel::predict(
            &mix.with(MaterialType::SilicaFume, mix.silica_fume + 10.0),
            28.0,
        );
        let more_sp = PropertyKernel::predict(
            &mix.with(MaterialType::Superplasticizer, mix.superplasticizer + 5.0),
            28.0,
        );
        assert!(more_sf.compressive_strength >= base.compressive_strength, "{:?}", mix);
        assert!(more_sf.tensile_strength >= base.tensile_strength, "{:?}", mix);
        assert!(more_sp.compressive_strength >= base.compressive_strength, "{:?}", mix);
    }
}

#[test]
fn test_predictions_are_deterministic() {
    for mix in sweep() {
        let a = PropertyKernel::predict(&mix, 14.0);
        let b = PropertyKernel::predict(&mix, 14.0);
        assert_eq!(a.compressive_strength.to_bits(), b.compressive_strength.to_bits());
        assert_eq!(a.cost.to_bits(), b.cost.to_bits());
    }
}

#[test]
fn test_standard_uhpc_reference_point() {
    // 40 × 2.75^0.7 × (1 + 0.4 × 40/440) × 1.12
    let mix = MixDesign::new(400.0, 160.0, 0.0, 0.0, 40.0, 1000.0, 750.0, 12.0);
    let e = PropertyKernel::predict(&mix, 28.0);
    assert!((e.compressive_strength - 94.26).abs() / 94.26 < 0.01);
    assert!((e.cost - 135.41).abs() < 1e-9);
}

#[test]
fn test_literature_curves() {
    // 28 / (4 + 23.8): the ACI curve is not anchored at 100 % on day 28
    assert!((aci209_percent(28.0) - 100.719).abs() < 0.01);
    assert!((eurocode2_percent(28.0) - 100.0).abs() < 1e-9);
    assert!((eurocode2_percent(3.0) - 66.298).abs() < 0.01);
    assert_eq!(eurocode2_percent(2.9), 50.0);
    let mut previous = 0.0;
    for &age in &KEY_AGES {
        assert!(aci209_percent(age) > previous);
        previous = aci209_percent(age);
    }
}

#[test]
fn test_json_bridge_matches_native() {
    let mix_json = json!({
        "cement": 300, "water": 150, "slag": 120, "fly_ash": 80, "silica_fume": 25,
        "coarse_agg": 1000, "fine_agg": 750, "superplast": 10
    });
    let response: serde_json::Value =
        serde_json::from_str(&PropertyKernel::compute_json(&mix_json.to_string(), 56.0)).unwrap();

    let mix = MixDesign::new(300.0, 150.0, 120.0, 80.0, 25.0, 1000.0, 750.0, 10.0);
    let native = PropertyKernel::predict(&mix, 56.0);

    let estimate: PropertyEstimate = serde_json::from_value(response["estimate"].clone()).unwrap();
    for (wire, direct) in [
        (estimate.compressive_strength, native.compressive_strength),
        (estimate.tensile_strength, native.tensile_strength),
        (estimate.elastic_modulus, native.elastic_modulus),
        (estimate.upv, native.upv),
        (estimate.cost, native.cost),
    ] {
        assert!((wire - direct).abs() <= 1e-9 * direct.abs().max(1.0));
    }
    assert!(response["events"].is_array());
}

#[test]
fn test_json_bridge_rejects_negative_age() {
    let response: serde_json::Value = serde_json::from_str(&PropertyKernel::compute_json(
        &json!({"cement": 400, "water": 160}).to_string(),
        -3.0,
    ))
    .unwrap();
    assert_eq!(response["error"], "invalid curing age: -3 days");
}

#[test]
fn test_checked_and_unchecked_agree_on_valid_input() {
    let config = EngineConfig::default();
    for mix in sweep() {
        let checked = PropertyKernel::try_predict(&mix, 28.0, &config).unwrap();
        assert_eq!(checked, PropertyKernel::predict(&mix, 28.0));
    }
}
