//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod controller;         // 控制器事件（修改车辆集合与 SelectionState）
//!         mod filter;             // 品牌筛选下拉框
//!         mod form;               // 车辆表单输入
//!         mod modal;              // 弹窗
//!         mod table;              // 表格光标与行操作
//!
//!
//!     输入消息由子模块交给组件处理，组件通过 props 中的回调
//!     返回一条新的 AppMessage（通常是 ControllerMessage），再递归交给 update()：
//!
//!         AppMessage::Table(TableMessage::Delete)
//!             ↓ table::update()
//!         car_table.activate_delete() → (props.on_delete)(row_id)
//!             ↓
//!         AppMessage::Controller(ControllerMessage::CarDelete(row_id))
//!             ↓ controller::update()
//!         cars.delete_by_id() → selection.edit.clear_if() → recompute()
//!
//!
//!     recompute() 根据车辆集合与 SelectionState 推导表格与表单的 props，
//!     并通过 update_props() 写入组件。下一轮循环时 View 层整体重绘。
//!

mod controller;
mod filter;
mod form;
mod modal;
mod table;

pub use controller::recompute;

use crate::message::{edit_toggle, AppMessage};
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    let next = match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::FocusNext => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.next();
            }
            None
        }

        AppMessage::FocusPrev => {
            if !app.modal.is_open() {
                app.focus = app.focus.prev();
            }
            None
        }

        AppMessage::Filter(filter_msg) => filter::update(app, filter_msg),
        AppMessage::Table(table_msg) => table::update(app, table_msg),
        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Controller(controller_msg) => {
            controller::update(app, controller_msg);
            None
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
            None
        }

        AppMessage::GoBack => {
            // 先关闭弹窗，其次取消编辑
            if app.modal.is_open() {
                app.modal.close();
                None
            } else {
                app.selection.edit.edited_car_id().cloned().map(edit_toggle)
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Noop => None,
    };

    if let Some(next) = next {
        update(app, next);
    }
}
