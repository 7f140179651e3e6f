//! 控制器消息
//!
//! 组件通过回调把用户意图交给控制器，控制器是应用状态的唯一写入者。

use car_inventory_core::CarId;

use super::AppMessage;
use crate::model::components::FormValues;

/// 控制器消息
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerMessage {
    /// 品牌筛选变化（值为品牌 ID，空字符串表示全部）
    BrandChange(String),
    /// 删除车辆
    CarDelete(CarId),
    /// 提交新建表单
    CreateSubmit(FormValues),
    /// 切换某行的编辑状态
    EditToggle(CarId),
    /// 提交更新表单
    UpdateSubmit(FormValues),
}

// 组件回调：props 中以函数指针形式注入

pub fn brand_change(value: String) -> AppMessage {
    AppMessage::Controller(ControllerMessage::BrandChange(value))
}

pub fn car_delete(id: CarId) -> AppMessage {
    AppMessage::Controller(ControllerMessage::CarDelete(id))
}

pub fn create_submit(values: FormValues) -> AppMessage {
    AppMessage::Controller(ControllerMessage::CreateSubmit(values))
}

pub fn edit_toggle(id: CarId) -> AppMessage {
    AppMessage::Controller(ControllerMessage::EditToggle(id))
}

pub fn update_submit(values: FormValues) -> AppMessage {
    AppMessage::Controller(ControllerMessage::UpdateSubmit(values))
}
