//! Car Inventory Core Library
//!
//! Provides the data layer shared by Car Inventory front ends:
//! - Reference data (brands, models and the seeded cars), indexed by id
//! - The cars collection, which owns the mutable car list and joins every car
//!   with its model and brand into display rows
//! - The unified error type
//!
//! This library holds no UI state and performs no I/O besides parsing seed data
//! handed to it, so any front end (TUI today) can drive it.

pub mod error;
pub mod seed;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{CarsCollection, ReferenceData};
pub use types::{Brand, BrandId, Car, CarId, CarProps, JoinedCarRow, Model, ModelId};
