//! Transient notice stack, overlaid top-right.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::notify::NoticeKind;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

pub fn render_notices(f: &mut Frame, state: &AppState) {
    let screen = f.area();
    for (i, notice) in state.notices.iter().enumerate() {
        let y = screen.y + 1 + i as u16;
        if y >= screen.bottom() {
            break;
        }
        let text = format!(" {} ", notice.text);
        let width = (text.chars().count() as u16).min(screen.width);
        let area = Rect::new(screen.right().saturating_sub(width), y, width, 1);
        let style = match notice.kind {
            NoticeKind::Success => Styles::success(),
            NoticeKind::Error => Styles::error(),
        };
        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(text).style(style), area);
    }
}
