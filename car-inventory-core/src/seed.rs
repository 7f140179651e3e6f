//! Seed data loading
//!
//! The reference tables and the initial cars are read once at startup from a
//! JSON document shaped as `{ "brands": [...], "models": [...], "cars": [...] }`.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::services::{CarsCollection, ReferenceData};
use crate::types::{Brand, Car, Model};

const BUILTIN_SEED: &str = include_str!("../data/seed.json");

/// Raw seed document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default)]
    pub cars: Vec<Car>,
}

impl SeedData {
    /// Parse a seed document
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a seed file
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CoreError::SeedData(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Build the cars collection owning these cars
    ///
    /// Fails with `SeedData` when a car id is listed twice.
    pub fn into_collection(self) -> CoreResult<CarsCollection> {
        log::info!(
            "Seed loaded: {} brands, {} models, {} cars",
            self.brands.len(),
            self.models.len(),
            self.cars.len()
        );
        CarsCollection::new(ReferenceData::new(self.brands, self.models), self.cars)
    }
}

/// The seed shipped with the crate
pub fn builtin() -> CoreResult<SeedData> {
    SeedData::from_json(BUILTIN_SEED)
}
