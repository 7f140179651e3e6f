//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 顶部品牌筛选
    BrandFilter,
    /// 车辆表格
    #[default]
    Table,
    /// 车辆表单
    Form,
}

impl FocusPanel {
    /// Tab 顺序的下一个面板
    pub fn next(self) -> Self {
        match self {
            Self::BrandFilter => Self::Table,
            Self::Table => Self::Form,
            Self::Form => Self::BrandFilter,
        }
    }

    /// Tab 顺序的上一个面板
    pub fn prev(self) -> Self {
        match self {
            Self::BrandFilter => Self::Form,
            Self::Table => Self::BrandFilter,
            Self::Form => Self::Table,
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, Self::Form)
    }
}
