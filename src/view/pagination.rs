//! Pagination strip widget.
//!
//! Draws a [`PageControls`] model as
//! `< Prev  1 ... 4 [5] 6 ... 10  Next >`. Lists with a single page have no
//! controls and draw nothing.

use super::styles::Styles;
use crate::pager::{PageControls, PageMarker};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PREV_LABEL: &str = "< Prev";
const NEXT_LABEL: &str = "Next >";

/// Build the strip as a styled line.
pub fn strip_line(controls: &PageControls, styles: &Styles) -> Line<'static> {
    let nav_style = |enabled: bool| {
        if enabled {
            ratatui::style::Style::default()
        } else {
            styles.muted
        }
    };

    let mut spans = vec![
        Span::styled(PREV_LABEL, nav_style(controls.prev().is_some())),
        Span::raw(" "),
    ];

    for marker in controls.markers() {
        spans.push(Span::raw(" "));
        spans.push(match marker {
            PageMarker::Page(page) if controls.is_active(*page) => {
                Span::styled(format!("[{page}]"), styles.highlight)
            }
            PageMarker::Page(page) => Span::raw(page.to_string()),
            PageMarker::Ellipsis => Span::styled("...", styles.muted),
        });
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        NEXT_LABEL,
        nav_style(controls.next().is_some()),
    ));
    Line::from(spans)
}

/// Plain text of the strip.
pub fn strip_text(controls: &PageControls) -> String {
    strip_line(controls, &Styles::default())
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect()
}

/// Render the strip centered in `area`. Nothing is drawn for `None`.
pub fn render_pagination(
    frame: &mut Frame,
    area: Rect,
    controls: Option<&PageControls>,
    styles: &Styles,
) {
    let Some(controls) = controls else {
        return;
    };
    let strip = Paragraph::new(strip_line(controls, styles)).alignment(Alignment::Center);
    frame.render_widget(strip, area);
}
