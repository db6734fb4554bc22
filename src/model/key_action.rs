//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // List scrolling
    /// Scroll the visible list up one line. Default: k/↑
    ScrollUp,
    /// Scroll the visible list down one line. Default: j/↓
    ScrollDown,

    // Pagination
    /// Go to the next page. Default: l/→
    NextPage,
    /// Go to the previous page. Default: h/←
    PrevPage,
    /// Go to page 1. Default: Home
    FirstPage,
    /// Go to the last page. Default: End
    LastPage,
    /// Go to a page shown in the page strip. Field: page number (1-9)
    JumpToPage(u32),

    // Tabs
    /// Next tab of the current screen. Default: Tab
    NextTab,
    /// Previous tab of the current screen. Default: Shift+Tab
    PrevTab,
    /// Cycle the home feed ordering. Default: s
    CycleSort,

    // Navigation
    /// Open the home feed. Default: H
    GoHome,
    /// Open "my page". Default: m
    GoMyPage,
    /// Go back in location history. Default: Alt+← / b
    Back,
    /// Go forward in location history. Default: Alt+→ / f
    Forward,

    // Application
    /// Re-issue the visible list's query. Default: r
    Refresh,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action moves between pages of the visible list.
    pub fn is_page_action(self) -> bool {
        matches!(
            self,
            KeyAction::NextPage
                | KeyAction::PrevPage
                | KeyAction::FirstPage
                | KeyAction::LastPage
                | KeyAction::JumpToPage(_)
        )
    }
}
