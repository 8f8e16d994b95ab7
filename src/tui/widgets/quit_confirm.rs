//! Quit confirmation popup.

use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

use super::common::centered_box;

pub fn render_quit_confirm(f: &mut Frame) {
    let area = centered_box(34, 5, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::raw(" Quit the console?")),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" y/Enter ", Styles::tab_active()),
            Span::raw("quit   "),
            Span::styled("n/Esc ", Styles::tab_active()),
            Span::raw("stay"),
        ]),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Confirm ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}
