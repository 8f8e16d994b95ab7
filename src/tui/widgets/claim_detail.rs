//! Claim detail popup with the receipt image carousel.

use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Styles;

use super::common::centered_rect;

pub fn render_claim_detail(f: &mut Frame, state: &AppState) {
    let Some(detail) = state.claim_detail.as_ref() else {
        return;
    };
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let mut lines = Vec::new();
    if let Some(claim) = state.claims.items.iter().find(|c| c.id == detail.claim_id) {
        lines.push(Line::from(vec![
            Span::styled("Employee: ", Styles::dim()),
            Span::raw(format!("{} ({})", claim.employee, claim.emp_id)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Date:     ", Styles::dim()),
            Span::raw(claim.date.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Amount:   ", Styles::dim()),
            Span::raw(format!("{:.2}", claim.amount)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Category: ", Styles::dim()),
            Span::raw(claim.category.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Message:  ", Styles::dim()),
            Span::raw(claim.message.clone()),
        ]));
        lines.push(Line::raw(""));
    }

    if detail.images.is_empty() {
        lines.push(Line::styled(
            "No images available for this claim.",
            Styles::dim(),
        ));
    } else {
        lines.push(Line::from(Span::styled(
            format!("Images ({}/{}):", detail.index + 1, detail.images.len()),
            Styles::tab_active(),
        )));
        for (i, image) in detail.images.iter().enumerate() {
            let style = if i == detail.index {
                Styles::selected()
            } else {
                Styles::default()
            };
            lines.push(Line::styled(format!("  {image}"), style));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Left/Right switch image  Esc close",
        Styles::dim(),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Claim {} ", detail.claim_id));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
