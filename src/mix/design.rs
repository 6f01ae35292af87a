// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Mix constituents understood by the binder-factor model.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    Cement = 0,
    Water = 1,
    Slag = 2,
    FlyAsh = 3,
    SilicaFume = 4,
    CoarseAggregate = 5,
    FineAggregate = 6,
    Superplasticizer = 7,
}

impl MaterialType {
    pub const ALL: [MaterialType; 8] = [
        MaterialType::Cement,
        MaterialType::Water,
        MaterialType::Slag,
        MaterialType::FlyAsh,
        MaterialType::SilicaFume,
        MaterialType::CoarseAggregate,
        MaterialType::FineAggregate,
        MaterialType::Superplasticizer,
    ];

    /// Accepts the field names plus the short forms used by the dashboard.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "cement" => Some(MaterialType::Cement),
            "water" => Some(MaterialType::Water),
            "slag" | "ggbs" => Some(MaterialType::Slag),
            "fly_ash" | "flyash" => Some(MaterialType::FlyAsh),
            "silica_fume" | "silicafume" | "sf" => Some(MaterialType::SilicaFume),
            "coarse_aggregate" | "coarse_agg" | "gravel" => Some(MaterialType::CoarseAggregate),
            "fine_aggregate" | "fine_agg" | "sand" => Some(MaterialType::FineAggregate),
            "superplasticizer" | "superplast" | "sp" => Some(MaterialType::Superplasticizer),
            _ => None,
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            MaterialType::Cement => "cement",
            MaterialType::Water => "water",
            MaterialType::Slag => "slag",
            MaterialType::FlyAsh => "fly_ash",
            MaterialType::SilicaFume => "silica_fume",
            MaterialType::CoarseAggregate => "coarse_aggregate",
            MaterialType::FineAggregate => "fine_aggregate",
            MaterialType::Superplasticizer => "superplasticizer",
        }
    }

    pub fn is_binder(self) -> bool {
        matches!(
            self,
            MaterialType::Cement
                | MaterialType::Slag
                | MaterialType::FlyAsh
                | MaterialType::SilicaFume
        )
    }
}

/// Mix design for the binder-factor model. All masses in kg/m³.
///
/// Missing JSON fields default to 0 so partial mixes from the front end
/// deserialize; the degenerate-input rule then decides what comes out.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixDesign {
    pub cement: f64,
    pub water: f64,
    pub slag: f64,
    #[serde(alias = "flyAsh")]
    pub fly_ash: f64,
    #[serde(alias = "silicaFume")]
    pub silica_fume: f64,
    #[serde(alias = "coarse_agg", alias = "coarseAggregate")]
    pub coarse_aggregate: f64,
    #[serde(alias = "fine_agg", alias = "fineAggregate")]
    pub fine_aggregate: f64,
    #[serde(alias = "superplast", alias = "sp")]
    pub superplasticizer: f64,
}

#[wasm_bindgen]
impl MixDesign {
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cement: f64,
        water: f64,
        slag: f64,
        fly_ash: f64,
        silica_fume: f64,
        coarse_aggregate: f64,
        fine_aggregate: f64,
        superplasticizer: f64,
    ) -> MixDesign {
        MixDesign {
            cement,
            water,
            slag,
            fly_ash,
            silica_fume,
            coarse_aggregate,
            fine_aggregate,
            superplasticizer,
        }
    }

    /// cement + slag + fly ash + silica fume
    pub fn total_binder(&self) -> f64 {
        self.components()
            .filter(|(material, _)| material.is_binder())
            .map(|(_, mass)| mass)
            .sum()
    }

    pub fn total_aggregate(&self) -> f64 {
        self.coarse_aggregate + self.fine_aggregate
    }

    /// Water-to-cement mass ratio, 0 when there is no cement.
    pub fn water_cement_ratio(&self) -> f64 {
        if self.cement > 0.0 {
            self.water / self.cement
        } else {
            0.0
        }
    }

    /// Water-to-binder mass ratio, 0 when there is no binder.
    pub fn water_binder_ratio(&self) -> f64 {
        let binder = self.total_binder();
        if binder > 0.0 {
            self.water / binder
        } else {
            0.0
        }
    }

    /// No water or no cement: every estimate is zero for such a mix.
    pub fn is_degenerate(&self) -> bool {
        self.water <= 0.0 || self.cement <= 0.0
    }
}

impl MixDesign {
    pub fn get(&self, material: MaterialType) -> f64 {
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

    /// Copy of this mix with one constituent replaced.
    pub fn with(mut self, material: MaterialType, mass: f64) -> MixDesign {
        match material {
            MaterialType::Cement => self.cement = mass,
            MaterialType::Water => self.water = mass,
            MaterialType::Slag => self.slag = mass,
            MaterialType::FlyAsh => self.fly_ash = mass,
            MaterialType::SilicaFume => self.silica_fume = mass,
            MaterialType::CoarseAggregate => self.coarse_aggregate = mass,
            MaterialType::FineAggregate => self.fine_aggregate = mass,
            MaterialType::Superplasticizer => self.superplasticizer = mass,
        }
        self
    }

    /// `(material, mass)` pairs in declaration order.
    pub fn components(&self) -> impl Iterator<Item = (MaterialType, f64)> + '_ {
        MaterialType::ALL.iter().map(move |&m| (m, self.get(m)))
    }

    /// Rejects negative and non-finite masses.
    pub fn validate(&self) -> Result<()> {
        for (material, mass) in self.components() {
            if !mass.is_finite() || mass < 0.0 {
                return Err(Error::InvalidQuantity {
                    field: material.field_name(),
                    value: mass,
                });
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<MixDesign> {
        Ok(serde_json::from_str(json)?)
    }
}
