//! 业务逻辑服务层

mod cars_collection;
mod reference_data;

pub use cars_collection::CarsCollection;
pub use reference_data::ReferenceData;
