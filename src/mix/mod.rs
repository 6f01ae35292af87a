// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

pub mod design;
pub mod linear;
pub mod presets;

pub use design::{MaterialType, MixDesign};
pub use linear::{LinearMixDesign, REPORT_SAMPLE};
pub use presets::{find_preset, name_key, MixPreset, ALL_PRESETS, COMPARISON_SET};
