//! UI 组件状态
//!
//! 每个组件持有自己的 props，`update_props` 合并新 props 后，
//! 下一帧由 view/components/ 中对应的渲染函数整体重绘（不做增量 diff）。
//!
//! 组件不修改共享状态，只通过 props 中的回调函数产生 `AppMessage` 向上传递。

mod car_form;
mod field;
mod table;

pub use car_form::{CarForm, CarFormPatch, CarFormProps, FormField, FormValues};
pub use field::{SelectField, SelectFieldPatch, SelectOption, TextField, TextFieldPatch};
pub use table::{Column, TableProps, TablePropsPatch, TableView};

use car_inventory_core::CarId;

use crate::message::AppMessage;

/// 以车辆 ID 为参数的回调（表格行操作）
pub type RowCallback = fn(CarId) -> AppMessage;

/// 以字符串值为参数的回调（下拉框 on_change）
pub type ChangeCallback = fn(String) -> AppMessage;

/// 表单提交回调
pub type SubmitCallback = fn(FormValues) -> AppMessage;
