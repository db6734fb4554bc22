//! Screen layout.
//!
//! ```text
//! ┌ header: app name, location, history hints ┐
//! │ tab bar (sort tabs or my page tabs)        │
//! │ body: post list or profile                 │
//! │ pagination strip                           │
//! └ key help                                   ┘
//! ```

use super::pagination::render_pagination;
use super::post_list::render_post_list;
use super::styles::Styles;
use super::tabs::render_tab_bar;
use crate::model::{MyPageTab, Route, SortKey};
use crate::source::PageSource;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown on "my page" lists when nobody is signed in.
pub const NO_USER_TEXT: &str = "No user configured. Pass --user or set POSTPAGER_USER.";

const HELP_TEXT: &str =
    "←/→ page  Home/End first/last  1-9 jump  Tab tabs  s sort  m my page  H home  r refresh  b/f back/fwd  q quit";

/// Split `area` into header, tabs, body, pagination and help rows.
pub fn split_areas(area: Rect) -> [Rect; 5] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}

/// Draw the whole application.
pub fn render_app<S: PageSource>(frame: &mut Frame, state: &AppState<S>, styles: &Styles) {
    let [header, tabs, body, strip, help] = split_areas(frame.area());

    frame.render_widget(Paragraph::new(header_line(state, styles)), header);

    match state.route() {
        Route::Home => {
            let labels: Vec<&str> = SortKey::ALL.iter().map(|s| s.label()).collect();
            render_tab_bar(frame, tabs, "Feed", &labels, state.home.sort().index(), styles);
        }
        Route::MyPage(tab) => {
            let labels: Vec<&str> = MyPageTab::ALL.iter().map(|t| t.label()).collect();
            render_tab_bar(frame, tabs, "My page", &labels, tab.index(), styles);
        }
    }

    render_body(frame, body, state, styles);

    let controls = state.active_list().and_then(|list| list.controls());
    render_pagination(frame, strip, controls.as_ref(), styles);

    frame.render_widget(Paragraph::new(Line::styled(HELP_TEXT, styles.muted)), help);
}

fn header_line<S: PageSource>(state: &AppState<S>, styles: &Styles) -> Line<'static> {
    let history = state.history();
    let back = if history.can_go_back() { "◀" } else { " " };
    let forward = if history.can_go_forward() { "▶" } else { " " };
    Line::from(vec![
        Span::styled("postpager", styles.highlight),
        Span::raw(format!("  {back}{forward} ")),
        Span::styled(state.route().to_string(), styles.muted),
    ])
}

fn render_body<S: PageSource>(frame: &mut Frame, area: Rect, state: &AppState<S>, styles: &Styles) {
    let empty_text = match state.route() {
        Route::Home => "No posts yet.",
        Route::MyPage(MyPageTab::Info) => return render_profile(frame, area, state, styles),
        Route::MyPage(MyPageTab::Posts) => "You have not published anything yet.",
        Route::MyPage(MyPageTab::Drafts) => "No drafts.",
    };

    if matches!(state.route(), Route::MyPage(_)) && state.my_page.user().is_none() {
        let message = Paragraph::new(Line::styled(NO_USER_TEXT, styles.error))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(message, area);
        return;
    }

    if let Some(list) = state.active_list() {
        render_post_list(
            frame,
            area,
            list.state(),
            state.list_scroll(),
            empty_text,
            styles,
        );
    }
}

fn render_profile<S: PageSource>(frame: &mut Frame, area: Rect, state: &AppState<S>, styles: &Styles) {
    let lines = match state.my_page.user() {
        Some(user) => vec![
            Line::from(vec![
                Span::styled("Signed in as ", styles.muted),
                Span::styled(user.as_str().to_string(), styles.title),
            ]),
            Line::raw(""),
            Line::styled("Tab to browse your posts and drafts.", styles.muted),
        ],
        None => vec![Line::styled(NO_USER_TEXT, styles.error)],
    };
    let profile = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Profile"));
    frame.render_widget(profile, area);
}
