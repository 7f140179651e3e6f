//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 每一帧都根据 Model 整体重绘，组件的渲染函数只读取组件自身的 props 与交互状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 各组件的渲染函数
//!         mod layout;         // 整体布局
//!         pub mod theme;      // 主题与样式
//!
//!
//!     布局：
//!         ┌──────────────────────────────────────────────┐
//!         │ 标题栏                                        │
//!         ├──────────────────────────────────────────────┤
//!         │ 品牌筛选                                      │
//!         ├─────────────────────────────┬────────────────┤
//!         │ 车辆表格                     │ 车辆表单       │
//!         │                             │                │
//!         ├─────────────────────────────┴────────────────┤
//!         │ 状态栏                                        │
//!         └──────────────────────────────────────────────┘
//!         弹窗绘制在最上层。
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
