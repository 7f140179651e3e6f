//! 测试辅助模块
//!
//! 提供固定的参考数据和便捷的测试工厂方法。

use crate::services::{CarsCollection, ReferenceData};
use crate::types::{Brand, BrandId, Car, CarId, CarProps, Model, ModelId};

pub fn brand(id: &str, title: &str) -> Brand {
    Brand {
        id: BrandId::from(id),
        title: title.to_string(),
    }
}

pub fn model(id: &str, title: &str, brand_id: &str) -> Model {
    Model {
        id: ModelId::from(id),
        title: title.to_string(),
        brand_id: BrandId::from(brand_id),
    }
}

pub fn car(id: &str, model_id: &str, price: f64, year: i32) -> Car {
    Car {
        id: CarId::from(id),
        model_id: ModelId::from(model_id),
        price,
        year,
    }
}

pub fn car_props(brand_id: &str, model_id: &str, price: f64, year: i32) -> CarProps {
    CarProps {
        brand_id: BrandId::from(brand_id),
        model_id: ModelId::from(model_id),
        price,
        year,
    }
}

/// Toyota(b1): Corolla(m1), Camry(m2)；Honda(b2): Civic(m3)；Tesla(b3) 无车型
pub fn test_reference() -> ReferenceData {
    ReferenceData::new(
        vec![brand("b1", "Toyota"), brand("b2", "Honda"), brand("b3", "Tesla")],
        vec![
            model("m1", "Corolla", "b1"),
            model("m2", "Camry", "b1"),
            model("m3", "Civic", "b2"),
        ],
    )
}

pub fn empty_collection() -> CarsCollection {
    CarsCollection::new(test_reference(), Vec::new()).unwrap()
}
