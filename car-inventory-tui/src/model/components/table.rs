//! 车辆表格组件状态

use car_inventory_core::{CarId, JoinedCarRow};

use super::RowCallback;
use crate::message::AppMessage;

/// 表格列：字段名 → 表头
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub header: &'static str,
}

impl Column {
    pub const fn new(field: &'static str, header: &'static str) -> Self {
        Self { field, header }
    }
}

/// 表格 props
#[derive(Debug, Clone)]
pub struct TableProps {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows_data: Vec<JoinedCarRow>,
    pub on_delete: RowCallback,
    pub on_edit: RowCallback,
    pub edited_car_id: Option<CarId>,
}

/// 表格 props 的部分更新
#[derive(Debug, Clone, Default)]
pub struct TablePropsPatch {
    pub title: Option<String>,
    pub columns: Option<Vec<Column>>,
    pub rows_data: Option<Vec<JoinedCarRow>>,
    pub edited_car_id: Option<Option<CarId>>,
}

/// 车辆表格
#[derive(Debug, Clone)]
pub struct TableView {
    props: TableProps,
    /// 键盘光标所在行
    cursor: usize,
}

impl TableView {
    pub fn new(props: TableProps) -> Self {
        Self { props, cursor: 0 }
    }

    pub fn props(&self) -> &TableProps {
        &self.props
    }

    /// 合并新 props，整体替换表体
    pub fn update_props(&mut self, patch: TablePropsPatch) {
        if let Some(title) = patch.title {
            self.props.title = title;
        }
        if let Some(columns) = patch.columns {
            self.props.columns = columns;
        }
        if let Some(rows_data) = patch.rows_data {
            self.props.rows_data = rows_data;
        }
        if let Some(edited_car_id) = patch.edited_car_id {
            self.props.edited_car_id = edited_car_id;
        }
        self.clamp_cursor();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 选择上一行
    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 选择下一行
    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.props.rows_data.len() {
            self.cursor += 1;
        }
    }

    /// 选择第一行
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// 选择最后一行
    pub fn select_last(&mut self) {
        self.cursor = self.props.rows_data.len().saturating_sub(1);
    }

    /// 光标所在行
    pub fn selected_row(&self) -> Option<&JoinedCarRow> {
        self.props.rows_data.get(self.cursor)
    }

    /// 该行是否正在编辑
    pub fn is_edited(&self, row: &JoinedCarRow) -> bool {
        self.props.edited_car_id.as_ref() == Some(&row.id)
    }

    /// 编辑按钮文本：正在编辑的行显示 Cancel
    pub fn edit_label(&self, row: &JoinedCarRow) -> &'static str {
        if self.is_edited(row) {
            "Cancel"
        } else {
            "Edit"
        }
    }

    /// 点击光标行的编辑按钮
    pub fn activate_edit(&self) -> Option<AppMessage> {
        self.selected_row().map(|row| (self.props.on_edit)(row.id.clone()))
    }

    /// 点击光标行的删除按钮
    pub fn activate_delete(&self) -> Option<AppMessage> {
        self.selected_row()
            .map(|row| (self.props.on_delete)(row.id.clone()))
    }

    fn clamp_cursor(&mut self) {
        let len = self.props.rows_data.len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}
