//! 整体布局

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};

use super::components;
use super::theme::colors;

/// 渲染一帧
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 品牌筛选
            Constraint::Min(1),    // 表格 + 表单
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    components::brand_filter::render(
        &app.brand_select,
        frame,
        main_layout[1],
        app.focus == FocusPanel::BrandFilter,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_layout[2]);

    components::car_table::render(
        &app.car_table,
        frame,
        columns[0],
        app.focus == FocusPanel::Table,
    );
    components::car_form::render(
        &app.car_form,
        frame,
        columns[1],
        app.focus == FocusPanel::Form,
    );

    components::statusbar::render(app, frame, main_layout[3]);

    // 弹窗（在最上层）
    components::modal::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(concat!(" Car Inventory v", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
