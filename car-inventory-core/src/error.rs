//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::{BrandId, CarId, ModelId};

/// Which side of a join failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinEntity {
    /// A car points at a model that does not exist
    Car,
    /// A model points at a brand that does not exist
    Model,
}

impl std::fmt::Display for JoinEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Car => f.write_str("car"),
            Self::Model => f.write_str("model"),
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A car/model references a model/brand that is not loaded.
    /// This is data corruption: the join is aborted instead of rendering a blank row.
    #[error("Referential integrity violated: {entity} {id} references missing {missing}")]
    ReferentialIntegrity {
        entity: JoinEntity,
        id: String,
        missing: String,
    },

    /// add/update supplied a model that does not belong to the given brand
    #[error("Invalid reference: model {model_id} does not belong to brand {brand_id}")]
    InvalidReference { brand_id: BrandId, model_id: ModelId },

    /// update/delete targeted a car that does not exist
    #[error("Car not found: {0}")]
    NotFound(CarId),

    /// Seed data could not be parsed, or lists a car id twice
    #[error("Seed data error: {0}")]
    SeedData(String),

    /// No `c<N>` sequence number is left for a new car
    #[error("Car id sequence exhausted")]
    IdsExhausted,
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing resource),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidReference { .. } | Self::NotFound(_) => true,
            Self::ReferentialIntegrity { .. } | Self::SeedData(_) | Self::IdsExhausted => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SeedData(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
