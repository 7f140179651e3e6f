//! 参考数据（品牌、车型）
//!
//! 保留加载顺序用于展示，同时按 ID 建索引，联表查询为 O(1)。

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult, JoinEntity};
use crate::types::{Brand, BrandId, Model, ModelId};

/// 只读参考数据
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    brands: Vec<Brand>,
    models: Vec<Model>,
    brand_index: HashMap<BrandId, usize>,
    model_index: HashMap<ModelId, usize>,
}

impl ReferenceData {
    /// 从有序列表构建参考数据
    ///
    /// 重复 ID 以第一次出现为准。
    #[must_use]
    pub fn new(brands: Vec<Brand>, models: Vec<Model>) -> Self {
        let mut brand_index = HashMap::with_capacity(brands.len());
        for (i, brand) in brands.iter().enumerate() {
            if brand_index.contains_key(&brand.id) {
                log::warn!("Duplicate brand id in reference data: {}", brand.id);
                continue;
            }
            brand_index.insert(brand.id.clone(), i);
        }

        let mut model_index = HashMap::with_capacity(models.len());
        for (i, model) in models.iter().enumerate() {
            if model_index.contains_key(&model.id) {
                log::warn!("Duplicate model id in reference data: {}", model.id);
                continue;
            }
            model_index.insert(model.id.clone(), i);
        }

        Self {
            brands,
            models,
            brand_index,
            model_index,
        }
    }

    /// 所有品牌（加载顺序）
    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// 所有车型（加载顺序）
    #[must_use]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// 按 ID 查找品牌
    #[must_use]
    pub fn brand(&self, id: &BrandId) -> Option<&Brand> {
        self.brand_index.get(id).map(|&i| &self.brands[i])
    }

    /// 按 ID 查找车型
    #[must_use]
    pub fn model(&self, id: &ModelId) -> Option<&Model> {
        self.model_index.get(id).map(|&i| &self.models[i])
    }

    /// 某品牌下的车型（加载顺序）
    pub fn models_of<'a>(
        &'a self,
        brand_id: &'a BrandId,
    ) -> impl Iterator<Item = &'a Model> + 'a {
        self.models.iter().filter(move |m| &m.brand_id == brand_id)
    }

    /// 第一个品牌（新建表单的默认值）
    #[must_use]
    pub fn first_brand(&self) -> Option<&Brand> {
        self.brands.first()
    }

    /// 解析车型及其品牌
    ///
    /// `referrer` 是发起查询的车辆 ID，只用于错误信息。
    pub fn resolve_model(
        &self,
        referrer: &str,
        model_id: &ModelId,
    ) -> CoreResult<(&Model, &Brand)> {
        let model = self
            .model(model_id)
            .ok_or_else(|| CoreError::ReferentialIntegrity {
                entity: JoinEntity::Car,
                id: referrer.to_string(),
                missing: format!("model {model_id}"),
            })?;
        let brand = self
            .brand(&model.brand_id)
            .ok_or_else(|| CoreError::ReferentialIntegrity {
                entity: JoinEntity::Model,
                id: model.id.to_string(),
                missing: format!("brand {}", model.brand_id),
            })?;
        Ok((model, brand))
    }

    /// 车型是否存在且属于该品牌
    #[must_use]
    pub fn model_belongs_to(&self, model_id: &ModelId, brand_id: &BrandId) -> bool {
        self.brand(brand_id).is_some()
            && self
                .model(model_id)
                .is_some_and(|m| &m.brand_id == brand_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{brand, model, test_reference};

    #[test]
    fn lookups_by_id() {
        let data = test_reference();
        assert_eq!(data.brand(&BrandId::from("b1")).unwrap().title, "Toyota");
        assert_eq!(data.model(&ModelId::from("m3")).unwrap().title, "Civic");
        assert!(data.brand(&BrandId::from("nope")).is_none());
    }

    #[test]
    fn models_of_keeps_load_order() {
        let data = test_reference();
        let b1 = BrandId::from("b1");
        let titles: Vec<_> = data.models_of(&b1).map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Corolla", "Camry"]);
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let data = ReferenceData::new(
            vec![brand("b1", "First"), brand("b1", "Second")],
            vec![],
        );
        assert_eq!(data.brand(&BrandId::from("b1")).unwrap().title, "First");
        assert_eq!(data.brands().len(), 2);
    }

    #[test]
    fn resolve_model_reports_missing_brand() {
        let data = ReferenceData::new(vec![], vec![model("m1", "Orphan", "b404")]);
        let err = data.resolve_model("c1", &ModelId::from("m1")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ReferentialIntegrity { entity: JoinEntity::Model, .. }
        ));
    }

    #[test]
    fn model_belongs_to_checks_brand() {
        let data = test_reference();
        assert!(data.model_belongs_to(&ModelId::from("m1"), &BrandId::from("b1")));
        assert!(!data.model_belongs_to(&ModelId::from("m3"), &BrandId::from("b1")));
        assert!(!data.model_belongs_to(&ModelId::from("m404"), &BrandId::from("b1")));
    }
}
