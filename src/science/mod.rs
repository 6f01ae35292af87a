// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod cost;
pub mod elastic;
pub mod maturity;
pub mod strength;
pub mod sustainability;
