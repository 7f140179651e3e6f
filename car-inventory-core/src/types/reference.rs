//! 参考数据类型（品牌、车型）
//!
//! 启动时加载一次，之后不再变化。

use serde::{Deserialize, Serialize};

use super::{BrandId, ModelId};

/// 品牌
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub title: String,
}

/// 车型，归属于唯一品牌
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: ModelId,
    pub title: String,
    pub brand_id: BrandId,
}
