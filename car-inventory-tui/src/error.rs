//! 控制器错误类型

use car_inventory_core::CoreError;
use thiserror::Error;

/// 控制器处理事件时的错误
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// 表单中的价格/年份无法解析为数字
    #[error("{field} must be a number, got \"{value}\"")]
    InvalidNumber { field: &'static str, value: String },
}

pub type ControllerResult<T> = Result<T, ControllerError>;
