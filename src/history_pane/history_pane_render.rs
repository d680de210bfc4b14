//! Renders the operations table with a fixed header row and a stats
//! summary in the pane title.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::bot::{HistoryStats, OpResult, Operation, filter_history};
use crate::theme::history;

pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let visible = filter_history(app.bot.history(), app.dropdown.selected(), app.today);
    let stats = HistoryStats::for_operations(&visible);

    let title = Line::from(vec![
        Span::styled(
            format!(" Historial · {} ", app.dropdown.selected().label()),
            history::TITLE,
        ),
        Span::styled(
            format!(
                "({} ops · {}W/{}L · {}) ",
                stats.total_operations,
                stats.total_wins,
                stats.total_losses,
                stats.net_profit_display()
            ),
            Style::default().fg(history::STATS),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(history::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if visible.is_empty() {
        app.history_scroll.update_bounds(0, inner.height);
        let empty = Paragraph::new(Line::from(Span::styled(
            "Sin operaciones en este periodo.",
            Style::default().fg(history::EMPTY),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);

    // The header stays put; only the rows scroll
    app.history_scroll
        .update_bounds(visible.len() as u32, chunks[1].height);

    frame.render_widget(Paragraph::new(header_line()), chunks[0]);

    let rows: Vec<Line> = visible.iter().map(|op| operation_line(op)).collect();
    let table = Paragraph::new(rows).scroll((app.history_scroll.offset, 0));
    frame.render_widget(table, chunks[1]);
}

fn header_line() -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "{:<6} {:<10} {:<8} {:<8} {:<4} {:>7} {:<4} {:<4} {:>9}",
            "ID", "Fecha", "Hora", "Par", "Tipo", "Monto", "Dur.", "Res.", "Beneficio"
        ),
        history::HEADER,
    ))
}

fn operation_line(op: &Operation) -> Line<'_> {
    let result_color = match op.result {
        OpResult::Win => history::WIN,
        OpResult::Loss => history::LOSS,
    };
    let profit_color = if op.profit >= 0.0 {
        history::WIN
    } else {
        history::LOSS
    };

    Line::from(vec![
        Span::styled(
            format!(
                "{:<6} {:<10} {:<8} {:<8} {:<4} {:>7} {:<4} ",
                op.id,
                op.date,
                op.time.format("%H:%M:%S"),
                op.pair,
                op.kind.label(),
                format!("${:.2}", op.amount),
                op.duration
            ),
            Style::default().fg(history::ROW),
        ),
        Span::styled(
            format!("{:<4}", op.result.label()),
            Style::default().fg(result_color),
        ),
        Span::styled(
            format!(" {:>9}", format!("{:+.2}", op.profit)),
            Style::default().fg(profit_color),
        ),
    ])
}

#[cfg(test)]
#[path = "history_pane_render_tests.rs"]
mod history_pane_render_tests;
