//! 表格消息
//!
//! 处理表格中的光标移动与行操作

/// 表格消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMessage {
    // ========== 光标移动 ==========
    /// 选择上一行
    SelectPrevious,
    /// 选择下一行
    SelectNext,
    /// 跳转到第一行
    SelectFirst,
    /// 跳转到最后一行
    SelectLast,

    // ========== 行操作 ==========
    /// 编辑 / 取消编辑当前行
    Edit,
    /// 删除当前行
    Delete,
}
