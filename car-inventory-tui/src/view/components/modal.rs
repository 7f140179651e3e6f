//! 弹窗渲染

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block(title: &str, border: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg))
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(title, c.error);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("Press Esc or Enter to close", Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(56, 22, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block("Help", Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section("Global"),
        entry("Tab/S-Tab", "Switch panel"),
        entry("Esc", "Close popup / cancel edit"),
        entry("Alt+h  ?", "Help"),
        entry("Alt+q  q", "Quit"),
        Line::from(""),
        section("Brand filter"),
        entry("←→  h l", "Change brand"),
        Line::from(""),
        section("Vehicles table"),
        entry("↑↓  j k", "Move cursor"),
        entry("e  Enter", "Edit / cancel edit"),
        entry("d  Del", "Delete vehicle"),
        Line::from(""),
        section("Vehicle form"),
        entry("↑↓", "Previous / next field"),
        entry("←→", "Change option"),
        entry("Enter", "Create / update"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
