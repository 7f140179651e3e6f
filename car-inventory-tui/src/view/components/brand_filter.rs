//! 品牌筛选下拉框

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::field::select_line;
use crate::model::components::SelectField;
use crate::view::theme::Styles;

pub fn render(select: &SelectField, frame: &mut Frame, area: Rect, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let paragraph = Paragraph::new(select_line(select, focused)).block(block);
    frame.render_widget(paragraph, area);
}
