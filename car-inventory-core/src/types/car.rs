//! 车辆相关类型定义

use serde::{Deserialize, Serialize};

use super::{BrandId, CarId, ModelId};

/// 车辆（库存条目），引用唯一车型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: CarId,
    pub model_id: ModelId,
    pub price: f64,
    pub year: i32,
}

/// 新建/更新车辆时提交的字段
///
/// `brand_id` 不存储在车辆上，只用于校验 `model_id` 归属。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarProps {
    pub brand_id: BrandId,
    pub model_id: ModelId,
    pub price: f64,
    pub year: i32,
}

/// 联表结果：车辆 × 车型 × 品牌
///
/// 每次渲染时重新计算，用完即弃。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedCarRow {
    pub id: CarId,
    /// 解析后的品牌 ID（用于按品牌过滤，不显示）
    #[serde(skip)]
    pub brand_id: BrandId,
    /// 品牌名称
    pub brand: String,
    /// 车型名称
    pub model: String,
    pub price: f64,
    pub year: i32,
}

impl JoinedCarRow {
    /// 按列名取单元格文本（表格按列配置渲染）
    #[must_use]
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.to_string()),
            "brand" => Some(self.brand.clone()),
            "model" => Some(self.model.clone()),
            "price" => Some(self.price.to_string()),
            "year" => Some(self.year.to_string()),
            _ => None,
        }
    }
}
