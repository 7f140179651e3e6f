//! 组件渲染函数
//!
//! 每个函数都是组件状态的纯函数：`render(component, frame, area, focused)`。

pub mod brand_filter;
pub mod car_form;
pub mod car_table;
mod field;
pub mod modal;
pub mod statusbar;
