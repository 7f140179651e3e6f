//! 应用主消息枚举

use super::{ControllerMessage, FilterMessage, FormMessage, ModalMessage, TableMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个面板
    FocusNext,

    /// 焦点移到上一个面板
    FocusPrev,

    /// 品牌筛选相关消息
    Filter(FilterMessage),

    /// 表格相关消息
    Table(TableMessage),

    /// 表单相关消息
    Form(FormMessage),

    /// 控制器事件
    Controller(ControllerMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 返回（关闭弹窗或取消编辑）
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
