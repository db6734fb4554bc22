//! Tab bar widget.
//!
//! Used for the home sort tabs and the "my page" tabs. Selection state
//! lives in the screen; this only draws it.

use super::styles::Styles;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render a bordered tab bar.
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `area` - The area to render the tab bar within
/// * `title` - Block title
/// * `labels` - Tab labels in display order
/// * `selected` - Index of the active tab; out-of-bounds indices highlight nothing
pub fn render_tab_bar(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    labels: &[&str],
    selected: usize,
    styles: &Styles,
) {
    let titles: Vec<Line> = labels.iter().map(|label| Line::from(*label)).collect();

    let mut tabs = Tabs::new(titles).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
    );

    if selected < labels.len() {
        tabs = tabs.highlight_style(styles.highlight).select(selected);
    }

    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortKey;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(labels: &[&str], selected: usize) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| {
                render_tab_bar(
                    frame,
                    frame.area(),
                    "Posts",
                    labels,
                    selected,
                    &Styles::default(),
                );
            })
            .unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn shows_every_sort_label() {
        let labels: Vec<&str> = SortKey::ALL.iter().map(|s| s.label()).collect();
        let terminal = render(&labels, 0);
        let text = buffer_text(&terminal);
        for label in labels {
            assert!(text.contains(label), "Tab bar should show '{label}'");
        }
    }

    #[test]
    fn shows_block_title() {
        let terminal = render(&["A", "B"], 1);
        assert!(buffer_text(&terminal).contains("Posts"));
    }

    #[test]
    fn selected_tab_uses_highlight_style() {
        let terminal = render(&["Alpha", "Beta"], 1);
        let buffer = terminal.backend().buffer();
        let styles = Styles::default();

        let beta_x = (0..buffer.area.width)
            .find(|&x| buffer[(x, 1)].symbol() == "B")
            .expect("Beta rendered");
        assert_eq!(buffer[(beta_x, 1)].modifier, styles.highlight.add_modifier);
    }

    #[test]
    fn out_of_bounds_selection_renders_without_panic() {
        let terminal = render(&["Only"], 5);
        assert!(buffer_text(&terminal).contains("Only"));
    }
}
