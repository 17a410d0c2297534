//! Stateless UI rendering.

use super::app::{App, Focus};
use super::layout::ScreenLayout;
use crate::game::{CellView, EntryKind, GameView};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tateti_rules::{Player, Square};

const HELP: &str = "1-9 / flechas + Enter: jugar | Tab: lista | o: orden | q: salir";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let view = app.game().view();

    let title = Paragraph::new("Ta-Te-Ti")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(view.status.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    draw_board(frame, &layout, app, &view);
    draw_toggle(frame, layout.toggle, &view);
    draw_moves(frame, &layout, app, &view);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App, view: &GameView) {
    for (cell, area) in view.board.cells.iter().zip(layout.cells) {
        let highlighted = app.focus() == Focus::Board && app.cursor() == cell.position;
        draw_cell(frame, area, cell, highlighted);
    }
    for area in layout.row_separators {
        let sep = Paragraph::new("─".repeat(area.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
    for area in layout.col_separators {
        let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, highlighted: bool) {
    let (symbol, mut style) = match cell.square {
        Square::Empty => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if cell.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if highlighted {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the symbol in the 3-row cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_toggle(frame: &mut Frame, area: Rect, view: &GameView) {
    let button = Paragraph::new(view.toggle_label.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_moves(frame: &mut Frame, layout: &ScreenLayout, app: &App, view: &GameView) {
    let lines: Vec<Line> = view
        .moves
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let mut style = match entry.kind {
                EntryKind::Current => Style::default().add_modifier(Modifier::ITALIC),
                EntryKind::JumpTo => Style::default().fg(Color::Cyan),
            };
            if entry.index == view.current {
                style = style.add_modifier(Modifier::BOLD);
            }
            if app.focus() == Focus::Moves && app.selected() == row {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let mut spans = vec![Span::styled(entry.label(), style)];
            if let Some(annotation) = entry.annotation() {
                spans.push(Span::styled(annotation, Style::default().fg(Color::DarkGray)));
            }
            Line::from(spans)
        })
        .collect();

    let border_style = match app.focus() {
        Focus::Moves => Style::default().fg(Color::Yellow),
        Focus::Board => Style::default(),
    };
    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(list, layout.moves);
}
