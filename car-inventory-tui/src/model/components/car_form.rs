//! 车辆表单组件状态
//!
//! 固定四个字段：品牌下拉框、车型下拉框、价格、年份。
//! 提交时读取控件的实时值（用户可能已修改），而不是 props 中的初始值。

use car_inventory_core::{BrandId, Model, ReferenceData};
use thiserror::Error;

use super::{SelectField, SelectFieldPatch, SelectOption, SubmitCallback, TextField, TextFieldPatch};
use crate::message::AppMessage;

/// 表单提交的值（均为字符串，由控制器解析为数字）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub brand: String,
    pub model: String,
    pub price: String,
    pub year: String,
}

/// 表单本地校验错误，不会传递给控制器
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormValidationError {
    #[error("Form Error: {0} is required")]
    Missing(&'static str),
}

/// 表单 props
#[derive(Debug, Clone)]
pub struct CarFormProps {
    pub title: String,
    pub values: FormValues,
    pub submit_btn_text: String,
    pub on_submit: SubmitCallback,
    /// 只影响样式
    pub is_edited: bool,
}

/// 表单 props 的部分更新
#[derive(Debug, Clone, Default)]
pub struct CarFormPatch {
    pub title: Option<String>,
    pub values: Option<FormValues>,
    pub submit_btn_text: Option<String>,
    pub on_submit: Option<SubmitCallback>,
    pub is_edited: Option<bool>,
}

/// 表单字段（焦点位置）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Brand,
    Model,
    Price,
    Year,
}

impl FormField {
    const ORDER: [FormField; 4] = [Self::Brand, Self::Model, Self::Price, Self::Year];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// 表单控件
#[derive(Debug, Clone)]
pub struct Fields {
    pub brand: SelectField,
    pub model: SelectField,
    pub price: TextField,
    pub year: TextField,
}

/// 车辆表单
#[derive(Debug, Clone)]
pub struct CarForm {
    props: CarFormProps,
    fields: Fields,
    /// 参考数据中的全部车型，用于按品牌过滤车型选项
    models: Vec<Model>,
    focus: FormField,
    /// 校验失败时显示的提示
    alert: Option<String>,
}

impl CarForm {
    pub fn new(props: CarFormProps, reference: &ReferenceData) -> Self {
        let brand_options = reference
            .brands()
            .iter()
            .map(|b| SelectOption::new(b.title.clone(), b.id.to_string()))
            .collect();

        let fields = Fields {
            brand: SelectField::new("brand", "Car Brand", brand_options),
            model: SelectField::new("model", "Car Model", Vec::new()),
            price: TextField::new("price", "Car Price"),
            year: TextField::new("year", "Car Year"),
        };

        let mut form = Self {
            props,
            fields,
            models: reference.models().to_vec(),
            focus: FormField::default(),
            alert: None,
        };
        form.seed_fields();
        form
    }

    pub fn props(&self) -> &CarFormProps {
        &self.props
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// 合并新 props；提供 values 时重新填充控件
    pub fn update_props(&mut self, patch: CarFormPatch) {
        if let Some(title) = patch.title {
            self.props.title = title;
        }
        if let Some(submit_btn_text) = patch.submit_btn_text {
            self.props.submit_btn_text = submit_btn_text;
        }
        if let Some(on_submit) = patch.on_submit {
            self.props.on_submit = on_submit;
        }
        if let Some(is_edited) = patch.is_edited {
            self.props.is_edited = is_edited;
        }
        if let Some(values) = patch.values {
            self.props.values = values;
            self.seed_fields();
            self.alert = None;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// 焦点下拉框切换到下一个选项
    pub fn select_next_option(&mut self) {
        match self.focus {
            FormField::Brand => {
                self.fields.brand.select_next();
                self.refresh_model_options(None);
            }
            FormField::Model => {
                self.fields.model.select_next();
            }
            FormField::Price | FormField::Year => {}
        }
    }

    /// 焦点下拉框切换到上一个选项
    pub fn select_prev_option(&mut self) {
        match self.focus {
            FormField::Brand => {
                self.fields.brand.select_prev();
                self.refresh_model_options(None);
            }
            FormField::Model => {
                self.fields.model.select_prev();
            }
            FormField::Price | FormField::Year => {}
        }
    }

    /// 向焦点文本框输入字符
    pub fn input(&mut self, ch: char) {
        if let Some(field) = self.focused_text_mut() {
            field.push(ch);
            self.alert = None;
        }
    }

    /// 焦点文本框删除字符
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_text_mut() {
            field.backspace();
            self.alert = None;
        }
    }

    /// 控件的实时值
    pub fn values(&self) -> FormValues {
        FormValues {
            brand: self.fields.brand.value.clone(),
            model: self.fields.model.value.clone(),
            price: self.fields.price.value.trim().to_string(),
            year: self.fields.year.value.trim().to_string(),
        }
    }

    /// 提交表单
    ///
    /// 有必填项为空时在表单内提示并返回 `None`；否则返回 `on_submit` 产生的消息。
    /// 表单不自行重置，由控制器下一次重新计算 props 时填充。
    pub fn submit(&mut self) -> Option<AppMessage> {
        let values = self.values();
        if let Err(e) = self.validate(&values) {
            log::debug!("Form submission rejected: {e}");
            self.alert = Some(e.to_string());
            return None;
        }
        self.alert = None;
        Some((self.props.on_submit)(values))
    }

    /// 必填项检查（按字段顺序报告第一个缺失项）
    fn validate(&self, values: &FormValues) -> Result<(), FormValidationError> {
        let required = [
            (self.fields.brand.name, &values.brand),
            (self.fields.model.name, &values.model),
            (self.fields.price.name, &values.price),
            (self.fields.year.name, &values.year),
        ];
        match required.iter().find(|(_, v)| v.is_empty()) {
            Some((name, _)) => Err(FormValidationError::Missing(*name)),
            None => Ok(()),
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormField::Price => Some(&mut self.fields.price),
            FormField::Year => Some(&mut self.fields.year),
            FormField::Brand | FormField::Model => None,
        }
    }

    fn seed_fields(&mut self) {
        let values = self.props.values.clone();
        self.fields.brand.update_props(SelectFieldPatch {
            value: Some(values.brand),
            ..Default::default()
        });
        self.refresh_model_options(Some(values.model));
        self.fields.price.update_props(TextFieldPatch {
            value: Some(values.price),
            ..Default::default()
        });
        self.fields.year.update_props(TextFieldPatch {
            value: Some(values.year),
            ..Default::default()
        });
    }

    /// 车型选项只显示当前所选品牌下的车型
    fn refresh_model_options(&mut self, value: Option<String>) {
        let brand_id = BrandId::new(self.fields.brand.value.clone());
        let options = self
            .models
            .iter()
            .filter(|m| m.brand_id == brand_id)
            .map(|m| SelectOption::new(m.title.clone(), m.id.to_string()))
            .collect();
        self.fields.model.update_props(SelectFieldPatch {
            options: Some(options),
            value,
            ..Default::default()
        });
    }
}
