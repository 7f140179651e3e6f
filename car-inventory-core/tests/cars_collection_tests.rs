#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `CarsCollection` against a small reference data set.

use car_inventory_core::{
    Brand, BrandId, CarId, CarProps, CarsCollection, CoreError, Model, ModelId, ReferenceData,
};

fn toyota_only() -> ReferenceData {
    ReferenceData::new(
        vec![Brand {
            id: BrandId::from("b1"),
            title: "Toyota".to_string(),
        }],
        vec![Model {
            id: ModelId::from("m1"),
            title: "Corolla".to_string(),
            brand_id: BrandId::from("b1"),
        }],
    )
}

fn two_brands() -> ReferenceData {
    ReferenceData::new(
        vec![
            Brand {
                id: BrandId::from("b1"),
                title: "Toyota".to_string(),
            },
            Brand {
                id: BrandId::from("b2"),
                title: "Honda".to_string(),
            },
        ],
        vec![
            Model {
                id: ModelId::from("m1"),
                title: "Corolla".to_string(),
                brand_id: BrandId::from("b1"),
            },
            Model {
                id: ModelId::from("m2"),
                title: "Civic".to_string(),
                brand_id: BrandId::from("b2"),
            },
        ],
    )
}

fn props(brand_id: &str, model_id: &str, price: f64, year: i32) -> CarProps {
    CarProps {
        brand_id: BrandId::from(brand_id),
        model_id: ModelId::from(model_id),
        price,
        year,
    }
}

// ===== Scenarios =====

#[test]
fn add_update_delete_lifecycle() {
    let mut coll = CarsCollection::new(toyota_only(), Vec::new()).unwrap();

    // add
    let id = coll.add(props("b1", "m1", 20000.0, 2020)).unwrap();
    assert_eq!(id, CarId::from("c1"));
    let rows = coll.all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id.as_str(), "c1");
    assert_eq!(rows[0].brand, "Toyota");
    assert_eq!(rows[0].model, "Corolla");
    assert!((rows[0].price - 20000.0).abs() < f64::EPSILON);
    assert_eq!(rows[0].year, 2020);

    // update
    coll.update(&id, props("b1", "m1", 18000.0, 2020)).unwrap();
    let rows = coll.all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert!((rows[0].price - 18000.0).abs() < f64::EPSILON);

    // delete
    coll.delete_by_id(&id).unwrap();
    assert!(coll.all().unwrap().is_empty());
    let err = coll.update(&id, props("b1", "m1", 1.0, 2020)).unwrap_err();
    assert_eq!(err, CoreError::NotFound(id));
}

#[test]
fn cross_brand_add_leaves_collection_unchanged() {
    let mut coll = CarsCollection::new(two_brands(), Vec::new()).unwrap();
    coll.add(props("b1", "m1", 1.0, 2000)).unwrap();
    let before = coll.all().unwrap();

    let err = coll.add(props("b1", "m2", 2.0, 2001)).unwrap_err();
    assert!(matches!(err, CoreError::InvalidReference { .. }));
    assert_eq!(coll.all().unwrap(), before);
}

// ===== Properties =====

/// Replays a fixed mix of operations against the collection and a plain
/// vector model, checking `all()` after every step.
#[test]
fn all_matches_model_after_mixed_operations() {
    #[derive(Clone, Copy)]
    enum Op {
        Add(&'static str, &'static str, f64, i32),
        Update(usize, &'static str, &'static str, f64, i32),
        Delete(usize),
    }

    let ops = [
        Op::Add("b1", "m1", 10.0, 2001),
        Op::Add("b2", "m2", 20.0, 2002),
        Op::Add("b1", "m1", 30.0, 2003),
        Op::Update(1, "b1", "m1", 21.0, 2012),
        Op::Delete(0),
        Op::Add("b2", "m2", 40.0, 2004),
        Op::Update(0, "b2", "m2", 22.0, 2022),
        Op::Delete(2),
        Op::Add("b1", "m1", 50.0, 2005),
        Op::Delete(0),
    ];

    let mut coll = CarsCollection::new(two_brands(), Vec::new()).unwrap();
    // (id, model title, price, year)
    let mut model: Vec<(CarId, &str, f64, i32)> = Vec::new();
    let mut seen_ids: Vec<CarId> = Vec::new();
    let title = |m: &str| if m == "m1" { "Corolla" } else { "Civic" };

    for op in ops {
        match op {
            Op::Add(b, m, price, year) => {
                let id = coll.add(props(b, m, price, year)).unwrap();
                assert!(!seen_ids.contains(&id), "id {id} reused");
                seen_ids.push(id.clone());
                model.push((id, title(m), price, year));
            }
            Op::Update(i, b, m, price, year) => {
                let id = model[i].0.clone();
                coll.update(&id, props(b, m, price, year)).unwrap();
                model[i] = (id, title(m), price, year);
            }
            Op::Delete(i) => {
                let (id, ..) = model.remove(i);
                coll.delete_by_id(&id).unwrap();
            }
        }

        let rows = coll.all().unwrap();
        assert_eq!(rows.len(), model.len());
        for (row, (id, model_title, price, year)) in rows.iter().zip(&model) {
            assert_eq!(&row.id, id);
            assert_eq!(row.model, *model_title);
            assert!((row.price - price).abs() < f64::EPSILON);
            assert_eq!(row.year, *year);
        }
    }
}

#[test]
fn by_brand_is_filtered_subset_of_all() {
    let mut coll = CarsCollection::new(two_brands(), Vec::new()).unwrap();
    coll.add(props("b1", "m1", 1.0, 2000)).unwrap();
    coll.add(props("b2", "m2", 2.0, 2001)).unwrap();
    coll.add(props("b1", "m1", 3.0, 2002)).unwrap();

    let all = coll.all().unwrap();
    for brand in ["b1", "b2"] {
        let brand_id = BrandId::from(brand);
        let expected: Vec<_> = all
            .iter()
            .filter(|r| r.brand_id == brand_id)
            .cloned()
            .collect();
        assert_eq!(coll.by_brand(&brand_id).unwrap(), expected);
    }
}
