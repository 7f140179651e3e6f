//! 控制器：处理组件回调产生的事件
//!
//! 每个事件处理函数按相同的步骤执行：
//!     1. 调用车辆集合（可能失败，失败时状态不变）
//!     2. 更新 SelectionState
//!     3. recompute() 重新推导表格与表单的 props

use car_inventory_core::{BrandId, CarId, CarProps, CoreResult, ModelId};

use crate::error::{ControllerError, ControllerResult};
use crate::message::{create_submit, update_submit, ControllerMessage};
use crate::model::components::{CarFormPatch, FormValues, TablePropsPatch};
use crate::model::{App, EditMode};

/// 处理控制器消息，错误在此统一上报
pub fn update(app: &mut App, msg: ControllerMessage) {
    let result = match msg {
        ControllerMessage::BrandChange(value) => on_brand_change(app, &value),
        ControllerMessage::CarDelete(id) => on_car_delete(app, &id),
        ControllerMessage::CreateSubmit(values) => on_create_submit(app, &values),
        ControllerMessage::EditToggle(id) => on_edit_toggle(app, &id),
        ControllerMessage::UpdateSubmit(values) => on_update_submit(app, &values),
    };

    if let Err(e) = result {
        report(app, e);
    }
}

fn on_brand_change(app: &mut App, value: &str) -> ControllerResult<()> {
    let brand_id = BrandId::from(value);
    app.selection.selected_brand_id = app
        .cars
        .reference()
        .brand(&brand_id)
        .map(|b| b.id.clone());
    recompute(app)?;
    Ok(())
}

fn on_car_delete(app: &mut App, id: &CarId) -> ControllerResult<()> {
    app.cars.delete_by_id(id)?;
    app.selection.edit.clear_if(id);
    app.set_status(format!("Deleted car {id}"));
    recompute(app)?;
    Ok(())
}

fn on_create_submit(app: &mut App, values: &FormValues) -> ControllerResult<()> {
    let props = parse_props(values)?;
    let id = app.cars.add(props)?;
    app.set_status(format!("Created car {id}"));
    recompute(app)?;
    Ok(())
}

fn on_edit_toggle(app: &mut App, id: &CarId) -> ControllerResult<()> {
    app.cars.get(id)?;
    app.selection.edit = app.selection.edit.toggle(id);
    recompute(app)?;
    Ok(())
}

fn on_update_submit(app: &mut App, values: &FormValues) -> ControllerResult<()> {
    let Some(id) = app.selection.edit.edited_car_id().cloned() else {
        log::debug!("Update submitted while not editing, ignored");
        return Ok(());
    };

    let props = parse_props(values)?;
    app.cars.update(&id, props)?;
    app.selection.edit = EditMode::Idle;
    app.set_status(format!("Updated car {id}"));
    recompute(app)?;
    Ok(())
}

/// 根据当前状态重新推导并下发表格与表单的 props
///
/// 两份 props 都推导成功后才写入组件；失败时组件保持上一次的 props。
pub fn recompute(app: &mut App) -> CoreResult<()> {
    let table = derive_table_props(app)?;
    let form = derive_form_props(app)?;
    app.car_table.update_props(table);
    app.car_form.update_props(form);
    Ok(())
}

fn derive_table_props(app: &App) -> CoreResult<TablePropsPatch> {
    let selected = app
        .selection
        .selected_brand_id
        .as_ref()
        .and_then(|id| app.cars.reference().brand(id));

    let (title, rows) = match selected {
        Some(brand) => (format!("{} brand", brand.title), app.cars.by_brand(&brand.id)?),
        None => ("All Vehicles".to_string(), app.cars.all()?),
    };

    Ok(TablePropsPatch {
        title: Some(title),
        rows_data: Some(rows),
        edited_car_id: Some(app.selection.edit.edited_car_id().cloned()),
        ..Default::default()
    })
}

fn derive_form_props(app: &App) -> CoreResult<CarFormPatch> {
    let patch = match app.selection.edit.edited_car_id() {
        None => {
            let reference = app.cars.reference();
            let brand = reference.first_brand();
            let model = brand.and_then(|b| reference.models_of(&b.id).next());
            CarFormPatch {
                title: Some("Create New Vehicle".to_string()),
                values: Some(FormValues {
                    brand: brand.map(|b| b.id.to_string()).unwrap_or_default(),
                    model: model.map(|m| m.id.to_string()).unwrap_or_default(),
                    price: String::new(),
                    year: String::new(),
                }),
                submit_btn_text: Some("Create".to_string()),
                on_submit: Some(create_submit),
                is_edited: Some(false),
            }
        }
        Some(id) => {
            let car = app.cars.edit_values(id)?;
            CarFormPatch {
                title: Some("Update Car Details".to_string()),
                values: Some(FormValues {
                    brand: car.brand_id.to_string(),
                    model: car.model_id.to_string(),
                    price: car.price.to_string(),
                    year: car.year.to_string(),
                }),
                submit_btn_text: Some("Update".to_string()),
                on_submit: Some(update_submit),
                is_edited: Some(true),
            }
        }
    };
    Ok(patch)
}

/// 表单值 → `CarProps`
fn parse_props(values: &FormValues) -> ControllerResult<CarProps> {
    let price = values
        .price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| ControllerError::InvalidNumber {
            field: "price",
            value: values.price.clone(),
        })?;
    let year = values
        .year
        .trim()
        .parse::<i32>()
        .map_err(|_| ControllerError::InvalidNumber {
            field: "year",
            value: values.year.clone(),
        })?;

    Ok(CarProps {
        brand_id: BrandId::from(values.brand.as_str()),
        model_id: ModelId::from(values.model.as_str()),
        price,
        year,
    })
}

/// 上报错误：核心错误按是否预期分级记录日志并弹窗，输入错误显示在状态栏
fn report(app: &mut App, err: ControllerError) {
    match err {
        ControllerError::Core(e) => {
            if e.is_expected() {
                log::warn!("{e}");
            } else {
                log::error!("{e}");
            }
            app.modal.show_error("Error", &e.to_string());
        }
        ControllerError::InvalidNumber { .. } => {
            log::debug!("{err}");
            app.set_status(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(brand: &str, model: &str, price: &str, year: &str) -> FormValues {
        FormValues {
            brand: brand.to_string(),
            model: model.to_string(),
            price: price.to_string(),
            year: year.to_string(),
        }
    }

    #[test]
    fn parse_props_accepts_fractional_price() {
        let props = parse_props(&values("b1", "m1", " 19999.5 ", "2021")).unwrap();
        assert!((props.price - 19999.5).abs() < f64::EPSILON);
        assert_eq!(props.year, 2021);
        assert_eq!(props.model_id, ModelId::from("m1"));
    }

    #[test]
    fn parse_props_rejects_non_numbers() {
        let err = parse_props(&values("b1", "m1", "cheap", "2021")).unwrap_err();
        assert!(matches!(err, ControllerError::InvalidNumber { field: "price", .. }));

        let err = parse_props(&values("b1", "m1", "inf", "2021")).unwrap_err();
        assert!(matches!(err, ControllerError::InvalidNumber { field: "price", .. }));

        let err = parse_props(&values("b1", "m1", "100", "20.5")).unwrap_err();
        assert!(matches!(err, ControllerError::InvalidNumber { field: "year", .. }));
    }
}
