//! 车辆表单

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::field::{select_line, text_line};
use crate::model::components::{CarForm, FormField};
use crate::view::theme::{colors, Styles};

pub fn render(form: &CarForm, frame: &mut Frame, area: Rect, focused: bool) {
    let c = colors();
    let props = form.props();
    let fields = form.fields();
    let is_focused = |field: FormField| focused && form.focus() == field;

    // 编辑模式下边框使用强调色
    let border_style = if props.is_edited {
        Styles::edited()
    } else {
        Styles::border(focused)
    };

    let block = Block::default()
        .title(format!(" {} ", props.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = vec![
        Line::from(""),
        select_line(&fields.brand, is_focused(FormField::Brand)),
        Line::from(""),
        select_line(&fields.model, is_focused(FormField::Model)),
        Line::from(""),
        text_line(&fields.price, is_focused(FormField::Price)),
        Line::from(""),
        text_line(&fields.year, is_focused(FormField::Year)),
        Line::from(""),
    ];

    if let Some(alert) = form.alert() {
        lines.push(Line::styled(
            format!("  {alert}"),
            Style::default().fg(c.error),
        ));
        lines.push(Line::from(""));
    }

    let button_color = if props.is_edited { c.warning } else { c.success };
    lines.push(
        Line::from(Span::styled(
            format!("[ {} ]", props.submit_btn_text),
            Style::default().fg(button_color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
