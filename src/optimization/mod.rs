// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod comparison;
pub mod requirements;

pub use comparison::{compare, try_compare, Candidate, ComparisonRow, MixComparator, RankBy};
pub use requirements::{optimize, Application, ProjectRequirements, RequirementCheck, Verdict};
