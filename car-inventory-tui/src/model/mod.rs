//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点面板（品牌筛选 / 表格 / 表单）
//!         mod selection;      // 品牌筛选值与编辑模式
//!
//!         pub mod components; // 组件状态（表格、表单、输入控件）
//!         pub mod state;      // 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub cars: CarsCollection,           // 车辆集合（来自 core）
//!             pub selection: SelectionState,      // 选择状态
//!
//!             pub brand_select: SelectField,      // 品牌筛选下拉框
//!             pub car_table: TableView,           // 车辆表格
//!             pub car_form: CarForm,              // 车辆表单
//!
//!             pub modal: ModalState               // 弹窗状态
//!         }
//!
//!     组件只保存 props 与自身交互状态（光标、焦点字段、输入内容），
//!     props 全部由 update::recompute 根据 cars + selection 推导。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、编辑模式（EditMode）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Idle ──(编辑某行)──▶ Editing(id)
//!         Editing(id) ──(再次编辑同一行 / 提交更新 / 删除该行)──▶ Idle
//!         Editing(id) ──(编辑另一行)──▶ Editing(other)
//!
//!     品牌筛选的变化不影响编辑模式。
//!

mod app;
mod focus;
mod selection;

pub mod components;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use selection::{EditMode, SelectionState};
pub use state::{Modal, ModalState};
