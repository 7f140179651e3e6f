//! 输入控件：文本框与下拉框
//!
//! 只实现核心依赖的最小契约：标签、值、选项可由外部配置更新，
//! 下拉框切换选项时通过 `on_change` 回调发出新值。

use super::ChangeCallback;
use crate::message::AppMessage;

/// 下拉框选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// 显示文本
    pub title: String,
    /// 提交值
    pub value: String,
}

impl SelectOption {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// 下拉框
#[derive(Debug, Clone)]
pub struct SelectField {
    /// 字段名（提交时的键）
    pub name: &'static str,
    pub label_text: String,
    pub options: Vec<SelectOption>,
    pub value: String,
    pub on_change: Option<ChangeCallback>,
}

/// 下拉框的部分配置
#[derive(Debug, Clone, Default)]
pub struct SelectFieldPatch {
    pub label_text: Option<String>,
    pub options: Option<Vec<SelectOption>>,
    pub value: Option<String>,
}

impl SelectField {
    /// 创建下拉框，默认选中第一个选项
    pub fn new(
        name: &'static str,
        label_text: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        let value = options.first().map(|o| o.value.clone()).unwrap_or_default();
        Self {
            name,
            label_text: label_text.into(),
            options,
            value,
            on_change: None,
        }
    }

    /// 设置 on_change 回调
    #[must_use]
    pub fn with_on_change(mut self, on_change: ChangeCallback) -> Self {
        self.on_change = Some(on_change);
        self
    }

    /// 合并新配置
    ///
    /// 只替换选项而当前值不在新选项中时，回落到第一个选项。
    pub fn update_props(&mut self, patch: SelectFieldPatch) {
        if let Some(label_text) = patch.label_text {
            self.label_text = label_text;
        }
        if let Some(options) = patch.options {
            self.options = options;
        }
        if let Some(value) = patch.value {
            self.value = value;
        } else if self.selected_index().is_none() {
            self.value = self.options.first().map(|o| o.value.clone()).unwrap_or_default();
        }
    }

    /// 当前值在选项中的位置
    pub fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.value == self.value)
    }

    /// 当前选项的显示文本
    pub fn selected_title(&self) -> Option<&str> {
        self.selected_index().map(|i| self.options[i].title.as_str())
    }

    /// 选择下一个选项（循环），返回 on_change 产生的消息
    pub fn select_next(&mut self) -> Option<AppMessage> {
        if self.options.is_empty() {
            return None;
        }
        let next = self
            .selected_index()
            .map_or(0, |i| (i + 1) % self.options.len());
        self.select_index(next)
    }

    /// 选择上一个选项（循环），返回 on_change 产生的消息
    pub fn select_prev(&mut self) -> Option<AppMessage> {
        if self.options.is_empty() {
            return None;
        }
        let len = self.options.len();
        let prev = self.selected_index().map_or(0, |i| (i + len - 1) % len);
        self.select_index(prev)
    }

    fn select_index(&mut self, index: usize) -> Option<AppMessage> {
        self.value = self.options.get(index)?.value.clone();
        self.on_change.map(|cb| cb(self.value.clone()))
    }
}

/// 文本框
#[derive(Debug, Clone)]
pub struct TextField {
    /// 字段名（提交时的键）
    pub name: &'static str,
    pub label_text: String,
    pub value: String,
}

/// 文本框的部分配置
#[derive(Debug, Clone, Default)]
pub struct TextFieldPatch {
    pub label_text: Option<String>,
    pub value: Option<String>,
}

impl TextField {
    pub fn new(name: &'static str, label_text: impl Into<String>) -> Self {
        Self {
            name,
            label_text: label_text.into(),
            value: String::new(),
        }
    }

    /// 合并新配置
    pub fn update_props(&mut self, patch: TextFieldPatch) {
        if let Some(label_text) = patch.label_text {
            self.label_text = label_text;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
    }

    /// 输入字符
    pub fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    /// 删除最后一个字符
    pub fn backspace(&mut self) {
        self.value.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{AppMessage, ControllerMessage};

    fn on_change(value: String) -> AppMessage {
        AppMessage::Controller(ControllerMessage::BrandChange(value))
    }

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("All", ""),
            SelectOption::new("Toyota", "b1"),
            SelectOption::new("Honda", "b2"),
        ]
    }

    #[test]
    fn select_defaults_to_first_option() {
        let field = SelectField::new("brand", "Brand", options());
        assert_eq!(field.value, "");
        assert_eq!(field.selected_title(), Some("All"));
    }

    #[test]
    fn select_next_wraps_and_fires_change() {
        let mut field = SelectField::new("brand", "Brand", options()).with_on_change(on_change);
        assert_eq!(field.select_next(), Some(on_change("b1".to_string())));
        field.select_next();
        assert_eq!(field.select_next(), Some(on_change(String::new())));
    }

    #[test]
    fn select_prev_wraps_backwards() {
        let mut field = SelectField::new("brand", "Brand", options());
        // 无回调时不产生消息
        assert_eq!(field.select_prev(), None);
        assert_eq!(field.value, "b2");
    }

    #[test]
    fn empty_select_does_nothing() {
        let mut field = SelectField::new("brand", "Brand", Vec::new()).with_on_change(on_change);
        assert_eq!(field.select_next(), None);
        assert_eq!(field.select_prev(), None);
    }

    #[test]
    fn replacing_options_falls_back_to_first() {
        let mut field = SelectField::new("model", "Model", options());
        field.value = "b2".to_string();
        field.update_props(SelectFieldPatch {
            options: Some(vec![SelectOption::new("Civic", "m3")]),
            ..Default::default()
        });
        assert_eq!(field.value, "m3");
    }

    #[test]
    fn text_field_editing() {
        let mut field = TextField::new("price", "Car Price");
        field.push('1');
        field.push('2');
        field.backspace();
        assert_eq!(field.value, "1");
        field.update_props(TextFieldPatch {
            value: Some("2020".to_string()),
            ..Default::default()
        });
        assert_eq!(field.value, "2020");
    }

    #[test]
    fn label_patch_keeps_value() {
        let mut select = SelectField::new("brand", "Brand", options());
        select.value = "b1".to_string();
        select.update_props(SelectFieldPatch {
            label_text: Some("Car Brand".to_string()),
            ..Default::default()
        });
        assert_eq!(select.label_text, "Car Brand");
        assert_eq!(select.value, "b1");

        let mut text = TextField::new("year", "Year");
        text.push('7');
        text.update_props(TextFieldPatch {
            label_text: Some("Car Year".to_string()),
            ..Default::default()
        });
        assert_eq!(text.label_text, "Car Year");
        assert_eq!(text.value, "7");
    }
}
