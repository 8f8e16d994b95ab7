//! Key binding help popup.

use ratatui::Frame;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

use super::common::centered_rect;

const HELP_TEXT: &str = "\
Navigation
  Tab / BackTab    switch tab
  1 / 2            employees / claims tab
  Up/Down  k/j     move selection
  PgUp / PgDn      page
  Home / End       first / last row

Tables
  /                filter by identifier column
  s                next sort column
  r                reverse sort direction
  R                refresh from backend

Employees
  n                register a new employee

Claims
  a / x / u        approve / reject / reset decision
  c                edit decision comment
  Enter            claim details and images

General
  P                change admin password
  Esc              dismiss notices
  ? or H           this help
  q                quit";

pub fn render_help(f: &mut Frame, scroll: usize) {
    let area = centered_rect(60, 80, f.area());
    f.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title(" Help ");
    let widget = Paragraph::new(HELP_TEXT)
        .style(Styles::default())
        .scroll((scroll as u16, 0))
        .block(block);
    f.render_widget(widget, area);
}
