//! 输入控件的单行渲染

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::model::components::{SelectField, TextField};
use crate::view::theme::colors;

/// 标签列宽
const LABEL_WIDTH: usize = 12;

fn label_span(label: &str, focused: bool) -> Span<'static> {
    let c = colors();
    let style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let prefix = if focused { "▶ " } else { "  " };
    // 使用 unicode-width 计算显示宽度
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    Span::styled(format!("{prefix}{label}{}", " ".repeat(padding)), style)
}

/// 下拉框：聚焦时显示 `< 值 >`
pub fn select_line(field: &SelectField, focused: bool) -> Line<'static> {
    let c = colors();
    let title = field.selected_title().unwrap_or("-").to_string();
    let value = if focused {
        Span::styled(
            format!("< {title} >"),
            Style::default().fg(c.selected_fg).bg(c.selected_bg),
        )
    } else {
        Span::styled(format!("  {title}  "), Style::default().fg(c.fg))
    };
    Line::from(vec![label_span(&field.label_text, focused), value])
}

/// 文本框：聚焦时在末尾显示光标
pub fn text_line(field: &TextField, focused: bool) -> Line<'static> {
    let c = colors();
    let mut spans = vec![label_span(&field.label_text, focused)];
    if field.value.is_empty() && !focused {
        spans.push(Span::styled("  (empty)", Style::default().fg(c.muted)));
    } else {
        spans.push(Span::styled(format!("  {}", field.value), Style::default().fg(c.fg)));
    }
    if focused {
        spans.push(Span::styled("_", Style::default().fg(c.highlight)));
    }
    Line::from(spans)
}
