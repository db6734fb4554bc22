//! Post list widget.
//!
//! One row per post: title, author and counters. Loading, failure and empty
//! states replace the rows with a single message.

use super::styles::Styles;
use crate::model::Post;
use crate::state::{ListState, LoadStatus};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown while the first response for a query is outstanding.
pub const LOADING_TEXT: &str = "Loading posts...";

/// Truncate `text` to `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn post_line(post: &Post, width: usize, styles: &Styles) -> Line<'static> {
    let meta = format!(
        "  {} · {} views · {} likes",
        post.author_nickname_or_id(),
        post.view_count,
        post.like_count
    );
    let title_width = width.saturating_sub(meta.width());
    Line::from(vec![
        Span::styled(truncate_to_width(&post.title, title_width), styles.title),
        Span::styled(meta, styles.muted),
    ])
}

/// Lines for a list in `state`, starting at row `scroll`.
pub fn list_lines(
    state: &ListState,
    scroll: usize,
    width: usize,
    empty_text: &str,
    styles: &Styles,
) -> Vec<Line<'static>> {
    match state.status() {
        LoadStatus::Idle => Vec::new(),
        LoadStatus::Loading => vec![Line::styled(LOADING_TEXT, styles.muted)],
        LoadStatus::Failed => vec![Line::styled(
            state.error_message().unwrap_or_default().to_string(),
            styles.error,
        )],
        LoadStatus::Loaded if state.items().is_empty() => {
            vec![Line::styled(empty_text.to_string(), styles.muted)]
        }
        LoadStatus::Loaded => state
            .items()
            .iter()
            .skip(scroll)
            .map(|post| post_line(post, width, styles))
            .collect(),
    }
}

/// Render a bordered list.
pub fn render_post_list(
    frame: &mut Frame,
    area: Rect,
    state: &ListState,
    scroll: usize,
    empty_text: &str,
    styles: &Styles,
) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let lines = list_lines(state, scroll, inner_width, empty_text, styles);
    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListQuery, PageSize};
    use crate::source::test_support::published;
    use crate::source::MemorySource;
    use crate::state::ListViewController;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn controller(posts: u32) -> ListViewController<MemorySource> {
        ListViewController::new(
            MemorySource::new(published(posts, "alice")),
            ListQuery::new(PageSize::new(4).unwrap()),
        )
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn truncate_cuts_with_ellipsis() {
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn truncate_counts_wide_characters() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate_to_width("日本語の題名", 5), "日本…");
    }

    #[test]
    fn loading_shows_placeholder() {
        let mut list = controller(3);
        list.refresh();
        let lines = list_lines(list.state(), 0, 60, "No posts", &Styles::default());
        assert_eq!(text(&lines), vec![LOADING_TEXT.to_string()]);
    }

    #[test]
    fn failure_shows_message() {
        let mut list = controller(3);
        list.source_mut()
            .fail_with(Some(crate::model::FetchError::Transport("down".into())));
        list.refresh();
        list.poll();

        let lines = list_lines(list.state(), 0, 60, "No posts", &Styles::default());
        assert_eq!(text(&lines), vec!["Failed to load the post list.".to_string()]);
    }

    #[test]
    fn empty_list_shows_empty_text() {
        let mut list = controller(0);
        list.refresh();
        list.poll();
        let lines = list_lines(list.state(), 0, 60, "No posts yet", &Styles::default());
        assert_eq!(text(&lines), vec!["No posts yet".to_string()]);
    }

    #[test]
    fn loaded_rows_skip_scrolled_items() {
        let mut list = controller(3);
        list.refresh();
        list.poll();

        let lines = list_lines(list.state(), 1, 80, "", &Styles::default());
        let rows = text(&lines);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Post 2"));
        assert!(rows[0].contains("20 views"));
    }
}
