//! 类型定义模块

mod car;
mod ids;
mod reference;

pub use car::{Car, CarProps, JoinedCarRow};
pub use ids::{BrandId, CarId, ModelId};
pub use reference::{Brand, Model};
