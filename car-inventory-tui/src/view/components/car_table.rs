//! 车辆表格

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::model::components::TableView;
use crate::view::theme::{colors, Styles};

/// 操作列宽度
const ACTIONS_WIDTH: u16 = 20;

pub fn render(table: &TableView, frame: &mut Frame, area: Rect, focused: bool) {
    let props = table.props();
    let block = Block::default()
        .title(format!(" {} ", props.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if props.rows_data.is_empty() {
        let c = colors();
        let content = vec![
            Line::from(""),
            Line::styled("  No vehicles.", Style::default().fg(c.muted)),
        ];
        frame.render_widget(Paragraph::new(content).block(block), area);
        return;
    }

    let header = Row::new(
        props
            .columns
            .iter()
            .map(|col| Cell::from(col.header))
            .chain(std::iter::once(Cell::from("Actions"))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));

    let rows = props.rows_data.iter().map(|row| {
        let cells = props
            .columns
            .iter()
            .map(|col| Cell::from(row.field(col.field).unwrap_or_default()))
            .chain(std::iter::once(Cell::from(format!(
                "[{}] [Delete]",
                table.edit_label(row)
            ))));

        let style = if table.is_edited(row) {
            Styles::edited()
        } else {
            Style::default().fg(colors().fg)
        };
        Row::new(cells).style(style)
    });

    let widths = props
        .columns
        .iter()
        .map(|_| Constraint::Fill(1))
        .chain(std::iter::once(Constraint::Length(ACTIONS_WIDTH)));

    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(if focused { Styles::selected() } else { Style::default() })
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(table.cursor()));
    frame.render_stateful_widget(widget, area, &mut state);
}
