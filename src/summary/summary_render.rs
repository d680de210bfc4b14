//! Renders the summary cards: balance, today's operations, success rate,
//! and the remote status when the poller is configured.
//!
//! The cards always reflect today's numbers; the period dropdown only
//! changes the history pane below them.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::theme::summary;

pub fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    let mut cards: Vec<(&str, Vec<Line<'static>>)> = vec![
        (" Balance Actual ", balance_lines(app)),
        (" Operaciones Hoy ", operations_lines(app)),
        (" Tasa de Éxito ", success_rate_lines(app)),
    ];
    if app.poller.configured() {
        cards.push((" Remoto ", remote_lines(app)));
    }

    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let columns = Layout::horizontal(constraints).split(area);

    for ((title, lines), column) in cards.into_iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, summary::TITLE))
            .border_style(Style::default().fg(summary::BORDER));
        frame.render_widget(Paragraph::new(lines).block(block), *column);
    }
}

fn value_style(color: ratatui::style::Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn balance_lines(app: &App) -> Vec<Line<'static>> {
    let state_color = if app.bot.active {
        summary::STATE_ACTIVE
    } else {
        summary::STATE_INACTIVE
    };
    vec![
        Line::from(Span::styled(
            format!("${:.2}", app.bot.balance),
            value_style(summary::BALANCE),
        )),
        Line::from(Span::styled(
            app.bot.status_line(),
            Style::default().fg(state_color),
        )),
    ]
}

fn operations_lines(app: &App) -> Vec<Line<'static>> {
    let stats = app.today_stats();
    vec![
        Line::from(Span::styled(
            stats.total_operations.to_string(),
            value_style(summary::VALUE),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} ganadas", stats.total_wins),
                Style::default().fg(summary::WINS),
            ),
            Span::styled(" · ", Style::default().fg(summary::CAPTION)),
            Span::styled(
                format!("{} perdidas", stats.total_losses),
                Style::default().fg(summary::LOSSES),
            ),
        ]),
    ]
}

fn success_rate_lines(app: &App) -> Vec<Line<'static>> {
    let stats = app.today_stats();
    vec![
        Line::from(Span::styled(
            format!("{}%", stats.success_rate()),
            value_style(summary::VALUE),
        )),
        Line::from(Span::styled(
            format!("sobre {} operaciones", stats.total_operations),
            Style::default().fg(summary::CAPTION),
        )),
    ]
}

fn remote_lines(app: &App) -> Vec<Line<'static>> {
    match app.poller.latest() {
        Some(snapshot) => {
            let (state_label, state_color) = if snapshot.bot_active {
                ("Bot activo", summary::STATE_ACTIVE)
            } else {
                ("Bot inactivo", summary::STATE_INACTIVE)
            };
            vec![
                Line::from(Span::styled(
                    format!("${:.2}", snapshot.balance),
                    value_style(summary::VALUE),
                )),
                Line::from(Span::styled(state_label, Style::default().fg(state_color))),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Esperando datos...",
            Style::default().fg(summary::REMOTE_WAITING),
        ))],
    }
}
