//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod controller;     // 控制器事件（组件回调产生）
//!         mod filter;         // 品牌筛选下拉框
//!         mod form;           // 车辆表单
//!         mod modal;          // 弹窗
//!         mod table;          // 车辆表格
//!
//!
//!     消息分两类：
//!         - 输入消息（TableMessage / FormMessage / FilterMessage）：
//!             由 event/handler.rs 根据按键生成，只改变组件自身的交互状态；
//!         - 控制器消息（ControllerMessage）：
//!             由组件回调（on_edit / on_delete / on_submit / on_change）生成，
//!             交给控制器修改 SelectionState 与车辆集合。
//!
//!         用户按 e
//!             ↓
//!         handler.rs 返回 AppMessage::Table(TableMessage::Edit)
//!             ↓
//!         update/table.rs 调用 car_table.activate_edit()
//!             ↓
//!         TableView 调用 props.on_edit(row_id)，得到 AppMessage::Controller(EditToggle(row_id))
//!             ↓
//!         update/controller.rs 切换编辑状态并重新计算 props
//!

mod app;
mod controller;
mod filter;
mod form;
mod modal;
mod table;

pub use app::AppMessage;
pub use controller::{
    brand_change, car_delete, create_submit, edit_toggle, update_submit, ControllerMessage,
};
pub use filter::FilterMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
pub use table::TableMessage;
