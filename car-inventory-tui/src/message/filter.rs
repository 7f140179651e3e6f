//! 品牌筛选消息

/// 品牌筛选下拉框消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMessage {
    /// 上一个选项
    Prev,
    /// 下一个选项
    Next,
}
