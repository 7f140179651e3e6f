//! 表单消息类型

/// 表单相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 下拉框上一个选项
    PrevOption,

    /// 下拉框下一个选项
    NextOption,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 提交
    Submit,
}
