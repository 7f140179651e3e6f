//! 主应用状态（控制器持有的全部状态）

use car_inventory_core::CarsCollection;

use super::components::{
    CarForm, CarFormProps, Column, FormValues, SelectField, SelectOption, TableProps, TableView,
};
use super::{FocusPanel, ModalState, SelectionState};
use crate::message::{brand_change, car_delete, create_submit, edit_toggle};

/// 表格列（字段名，表头）
pub const CAR_COLUMNS: [Column; 5] = [
    Column::new("id", "Id"),
    Column::new("brand", "Brand"),
    Column::new("model", "Model"),
    Column::new("price", "Price"),
    Column::new("year", "Year"),
];

/// 品牌筛选中表示“全部品牌”的选项值
pub const ALL_BRANDS: &str = "";

pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 车辆集合（关联查询引擎）
    pub cars: CarsCollection,

    /// 品牌筛选与编辑状态
    pub selection: SelectionState,

    // === 组件 ===
    pub brand_select: SelectField,
    pub car_table: TableView,
    pub car_form: CarForm,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 组件以空 props 创建，调用 `update::recompute` 后才有数据。
    pub fn new(cars: CarsCollection) -> Self {
        let reference = cars.reference();

        let mut brand_options = vec![SelectOption::new("All brands", ALL_BRANDS)];
        brand_options.extend(
            reference
                .brands()
                .iter()
                .map(|b| SelectOption::new(b.title.clone(), b.id.to_string())),
        );
        let brand_select = SelectField::new("brand-filter", "Filter by brand", brand_options)
            .with_on_change(brand_change);

        let car_table = TableView::new(TableProps {
            title: String::new(),
            columns: CAR_COLUMNS.to_vec(),
            rows_data: Vec::new(),
            on_delete: car_delete,
            on_edit: edit_toggle,
            edited_car_id: None,
        });

        let car_form = CarForm::new(
            CarFormProps {
                title: String::new(),
                values: FormValues::default(),
                submit_btn_text: String::new(),
                on_submit: create_submit,
                is_edited: false,
            },
            reference,
        );

        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            status_message: None,
            cars,
            selection: SelectionState::default(),
            brand_select,
            car_table,
            car_form,
            modal: ModalState::default(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
