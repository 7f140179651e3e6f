//! 车辆集合：车辆列表的唯一持有者
//!
//! 负责新增/更新/删除车辆，并把每辆车与其车型、品牌联表成展示行。
//! 所有变更都先校验再修改，失败时集合保持原样。

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::services::ReferenceData;
use crate::types::{BrandId, Car, CarId, CarProps, JoinedCarRow};

/// 新分配 ID 的前缀
const CAR_ID_PREFIX: &str = "c";

/// 车辆集合
#[derive(Debug, Clone)]
pub struct CarsCollection {
    reference: ReferenceData,
    /// 按插入顺序排列
    cars: Vec<Car>,
    /// 车辆 ID → `cars` 下标
    index: HashMap<CarId, usize>,
    /// 下一个待分配的序号
    next_seq: u64,
}

impl CarsCollection {
    /// 创建车辆集合
    ///
    /// 初始车辆保留原 ID；序号从已有 `c<N>` 的最大值之后开始，避免冲突。
    /// 重复的车辆 ID 返回 `SeedData`，序号已到上限返回 `IdsExhausted`。
    pub fn new(reference: ReferenceData, cars: Vec<Car>) -> CoreResult<Self> {
        let next_seq = match cars.iter().filter_map(|c| parse_seq(&c.id)).max() {
            Some(max) => max.checked_add(1).ok_or(CoreError::IdsExhausted)?,
            None => 1,
        };

        let mut index = HashMap::with_capacity(cars.len());
        for (i, car) in cars.iter().enumerate() {
            if index.insert(car.id.clone(), i).is_some() {
                return Err(CoreError::SeedData(format!("duplicate car id {}", car.id)));
            }
        }

        Ok(Self {
            reference,
            cars,
            index,
            next_seq,
        })
    }

    /// 参考数据
    #[must_use]
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// 车辆数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// 是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// 所有车辆的联表结果（插入顺序）
    pub fn all(&self) -> CoreResult<Vec<JoinedCarRow>> {
        self.cars.iter().map(|car| self.join(car)).collect()
    }

    /// 按品牌过滤的联表结果
    ///
    /// 没有车辆的品牌返回空列表，不是错误。
    pub fn by_brand(&self, brand_id: &BrandId) -> CoreResult<Vec<JoinedCarRow>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|row| &row.brand_id == brand_id)
            .collect())
    }

    /// 按 ID 获取车辆
    pub fn get(&self, id: &CarId) -> CoreResult<&Car> {
        self.index
            .get(id)
            .map(|&i| &self.cars[i])
            .ok_or_else(|| CoreError::NotFound(id.clone()))
    }

    /// 还原车辆的可编辑字段（含车型所属品牌），用于预填表单
    pub fn edit_values(&self, id: &CarId) -> CoreResult<CarProps> {
        let car = self.get(id)?;
        let (model, brand) = self.reference.resolve_model(car.id.as_str(), &car.model_id)?;
        Ok(CarProps {
            brand_id: brand.id.clone(),
            model_id: model.id.clone(),
            price: car.price,
            year: car.year,
        })
    }

    /// 新增车辆，返回分配的 ID
    pub fn add(&mut self, props: CarProps) -> CoreResult<CarId> {
        self.check_reference(&props)?;

        let id = self.fresh_id()?;
        self.index.insert(id.clone(), self.cars.len());
        self.cars.push(Car {
            id: id.clone(),
            model_id: props.model_id,
            price: props.price,
            year: props.year,
        });

        log::info!("Car added: {id}");
        Ok(id)
    }

    /// 更新车辆（整体替换可变字段，保留 ID 与位置）
    pub fn update(&mut self, id: &CarId, props: CarProps) -> CoreResult<()> {
        let &pos = self
            .index
            .get(id)
            .ok_or_else(|| CoreError::NotFound(id.clone()))?;
        self.check_reference(&props)?;

        let car = &mut self.cars[pos];
        car.model_id = props.model_id;
        car.price = props.price;
        car.year = props.year;

        log::info!("Car updated: {id}");
        Ok(())
    }

    /// 删除车辆
    pub fn delete_by_id(&mut self, id: &CarId) -> CoreResult<()> {
        let pos = self
            .index
            .remove(id)
            .ok_or_else(|| CoreError::NotFound(id.clone()))?;
        self.cars.remove(pos);
        self.reindex();

        log::info!("Car deleted: {id}");
        Ok(())
    }

    fn join(&self, car: &Car) -> CoreResult<JoinedCarRow> {
        let (model, brand) = self.reference.resolve_model(car.id.as_str(), &car.model_id)?;
        Ok(JoinedCarRow {
            id: car.id.clone(),
            brand_id: brand.id.clone(),
            brand: brand.title.clone(),
            model: model.title.clone(),
            price: car.price,
            year: car.year,
        })
    }

    fn check_reference(&self, props: &CarProps) -> CoreResult<()> {
        if self.reference.model_belongs_to(&props.model_id, &props.brand_id) {
            Ok(())
        } else {
            Err(CoreError::InvalidReference {
                brand_id: props.brand_id.clone(),
                model_id: props.model_id.clone(),
            })
        }
    }

    /// 分配新 ID；序号用尽时不修改计数器
    fn fresh_id(&mut self) -> CoreResult<CarId> {
        let seq = self.next_seq;
        self.next_seq = seq.checked_add(1).ok_or(CoreError::IdsExhausted)?;
        Ok(CarId::new(format!("{CAR_ID_PREFIX}{seq}")))
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, car) in self.cars.iter().enumerate() {
            self.index.insert(car.id.clone(), i);
        }
    }
}

/// 解析 `c<N>` 形式 ID 的序号
fn parse_seq(id: &CarId) -> Option<u64> {
    id.as_str().strip_prefix(CAR_ID_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JoinEntity;
    use crate::test_utils::{car, car_props, empty_collection, test_reference};
    use crate::types::ModelId;

    #[test]
    fn add_then_all_joins_titles() {
        let mut coll = empty_collection();
        let id = coll.add(car_props("b1", "m1", 20000.0, 2020)).unwrap();

        assert_eq!(id, CarId::from("c1"));
        let rows = coll.all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].brand, "Toyota");
        assert_eq!(rows[0].model, "Corolla");
        assert!((rows[0].price - 20000.0).abs() < f64::EPSILON);
        assert_eq!(rows[0].year, 2020);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut coll = empty_collection();
        let a = coll.add(car_props("b1", "m1", 1.0, 2000)).unwrap();
        coll.delete_by_id(&a).unwrap();
        let b = coll.add(car_props("b1", "m1", 1.0, 2000)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn seeded_ids_push_counter_forward() {
        let coll_cars = vec![car("c7", "m1", 1.0, 2000), car("legacy", "m3", 2.0, 2001)];
        let mut coll = CarsCollection::new(test_reference(), coll_cars).unwrap();
        let id = coll.add(car_props("b2", "m3", 3.0, 2002)).unwrap();
        assert_eq!(id, CarId::from("c8"));
    }

    #[test]
    fn seeded_max_sequence_is_rejected() {
        let cars = vec![car(&format!("c{}", u64::MAX), "m1", 1.0, 2000)];
        assert!(matches!(
            CarsCollection::new(test_reference(), cars),
            Err(CoreError::IdsExhausted)
        ));
    }

    #[test]
    fn add_fails_cleanly_when_sequence_runs_out() {
        let cars = vec![car(&format!("c{}", u64::MAX - 1), "m1", 1.0, 2000)];
        let mut coll = CarsCollection::new(test_reference(), cars).unwrap();

        let err = coll.add(car_props("b1", "m1", 2.0, 2001)).unwrap_err();
        assert_eq!(err, CoreError::IdsExhausted);
        assert_eq!(coll.len(), 1);
        // 失败后仍然失败，计数器未被推进
        assert_eq!(
            coll.add(car_props("b1", "m1", 2.0, 2001)),
            Err(CoreError::IdsExhausted)
        );
    }

    #[test]
    fn duplicate_seeded_ids_are_rejected() {
        let cars = vec![car("c1", "m1", 1.0, 2000), car("c1", "m3", 2.0, 2001)];
        let err = CarsCollection::new(test_reference(), cars).unwrap_err();
        assert_eq!(err, CoreError::SeedData("duplicate car id c1".to_string()));
    }

    #[test]
    fn delete_leaves_no_trace_of_seeded_id() {
        let cars = vec![car("c1", "m1", 1.0, 2000), car("c2", "m3", 2.0, 2001)];
        let mut coll = CarsCollection::new(test_reference(), cars).unwrap();

        coll.delete_by_id(&CarId::from("c1")).unwrap();
        let ids: Vec<_> = coll.all().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![CarId::from("c2")]);
        assert!(matches!(
            coll.delete_by_id(&CarId::from("c1")),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut coll = empty_collection();
        let first = coll.add(car_props("b1", "m1", 20000.0, 2020)).unwrap();
        let second = coll.add(car_props("b2", "m3", 15000.0, 2018)).unwrap();

        coll.update(&first, car_props("b1", "m2", 18000.0, 2021)).unwrap();

        let rows = coll.all().unwrap();
        assert_eq!(rows[0].id, first);
        assert_eq!(rows[0].model, "Camry");
        assert!((rows[0].price - 18000.0).abs() < f64::EPSILON);
        assert_eq!(rows[0].year, 2021);
        assert_eq!(rows[1].id, second);
    }

    #[test]
    fn update_missing_car_is_not_found() {
        let mut coll = empty_collection();
        let err = coll
            .update(&CarId::from("c1"), car_props("b1", "m1", 1.0, 2000))
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound(CarId::from("c1")));
    }

    #[test]
    fn update_with_mismatched_brand_leaves_car_untouched() {
        let mut coll = empty_collection();
        let id = coll.add(car_props("b1", "m1", 20000.0, 2020)).unwrap();

        let err = coll.update(&id, car_props("b1", "m3", 1.0, 1999)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidReference { .. }));
        assert_eq!(coll.get(&id).unwrap().model_id, ModelId::from("m1"));
    }

    #[test]
    fn add_with_model_of_other_brand_is_rejected() {
        let mut coll = empty_collection();
        let err = coll.add(car_props("b1", "m3", 1.0, 2000)).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidReference {
                brand_id: BrandId::from("b1"),
                model_id: ModelId::from("m3"),
            }
        );
        assert!(coll.is_empty());
    }

    #[test]
    fn add_with_unknown_model_is_rejected() {
        let mut coll = empty_collection();
        let err = coll.add(car_props("b1", "m404", 1.0, 2000)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidReference { .. }));
    }

    #[test]
    fn delete_removes_row() {
        let mut coll = empty_collection();
        let a = coll.add(car_props("b1", "m1", 1.0, 2000)).unwrap();
        let b = coll.add(car_props("b1", "m2", 2.0, 2001)).unwrap();
        let c = coll.add(car_props("b2", "m3", 3.0, 2002)).unwrap();

        coll.delete_by_id(&b).unwrap();

        let ids: Vec<_> = coll.all().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a, c.clone()]);
        // 删除后索引仍然正确
        assert_eq!(coll.get(&c).unwrap().year, 2002);
    }

    #[test]
    fn delete_missing_car_is_not_found() {
        let mut coll = empty_collection();
        assert!(matches!(
            coll.delete_by_id(&CarId::from("c1")),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn by_brand_filters_on_resolved_brand() {
        let mut coll = empty_collection();
        coll.add(car_props("b1", "m1", 1.0, 2000)).unwrap();
        let honda = coll.add(car_props("b2", "m3", 2.0, 2001)).unwrap();
        coll.add(car_props("b1", "m2", 3.0, 2002)).unwrap();

        let rows = coll.by_brand(&BrandId::from("b2")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, honda);

        let toyota = coll.by_brand(&BrandId::from("b1")).unwrap();
        assert_eq!(toyota.len(), 2);
        assert!(toyota.iter().all(|r| r.brand == "Toyota"));
    }

    #[test]
    fn by_brand_without_cars_is_empty() {
        let mut coll = empty_collection();
        coll.add(car_props("b1", "m1", 1.0, 2000)).unwrap();
        assert!(coll.by_brand(&BrandId::from("b3")).unwrap().is_empty());
        assert!(coll.by_brand(&BrandId::from("unknown")).unwrap().is_empty());
    }

    #[test]
    fn all_fails_on_dangling_model() {
        let coll =
            CarsCollection::new(test_reference(), vec![car("c1", "m404", 1.0, 2000)]).unwrap();
        let err = coll.all().unwrap_err();
        assert!(matches!(
            err,
            CoreError::ReferentialIntegrity { entity: JoinEntity::Car, .. }
        ));
        assert!(coll.by_brand(&BrandId::from("b1")).is_err());
    }

    #[test]
    fn edit_values_resolves_brand() {
        let mut coll = empty_collection();
        let id = coll.add(car_props("b2", "m3", 9000.5, 2015)).unwrap();
        let props = coll.edit_values(&id).unwrap();
        assert_eq!(props, car_props("b2", "m3", 9000.5, 2015));
    }

    #[test]
    fn edit_values_missing_car() {
        let coll = empty_collection();
        assert!(matches!(
            coll.edit_values(&CarId::from("c1")),
            Err(CoreError::NotFound(_))
        ));
    }
}
