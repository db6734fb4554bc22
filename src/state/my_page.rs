//! "My page" screen.
//!
//! Three tabs: a profile summary and two lists owned by the signed-in user,
//! one for published posts and one for drafts. Each list keeps its own
//! controller; switching tabs always starts the target list on page 1.

use super::list_controller::ListViewController;
use crate::model::{ListQuery, MyPageTab, PageSize, StatusScope, UserId};
use crate::source::PageSource;
use tracing::debug;

/// The signed-in user's screen.
pub struct MyPageScreen<S: PageSource> {
    tab: MyPageTab,
    user: Option<UserId>,
    posts: ListViewController<S>,
    drafts: ListViewController<S>,
}

impl<S: PageSource> MyPageScreen<S> {
    /// Create the screen on the profile tab. Nothing is fetched yet.
    pub fn new(posts_source: S, drafts_source: S, page_size: PageSize, user: Option<UserId>) -> Self {
        let base = ListQuery::new(page_size).with_owner(user.clone());
        Self {
            tab: MyPageTab::Info,
            user,
            posts: ListViewController::new(
                posts_source,
                base.clone().with_status(StatusScope::Published),
            ),
            drafts: ListViewController::new(drafts_source, base.with_status(StatusScope::Draft)),
        }
    }

    /// Active tab.
    pub fn tab(&self) -> MyPageTab {
        self.tab
    }

    /// Signed-in user, if any.
    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    /// Published-posts list.
    pub fn posts(&self) -> &ListViewController<S> {
        &self.posts
    }

    /// Drafts list.
    pub fn drafts(&self) -> &ListViewController<S> {
        &self.drafts
    }

    /// Mutable access to both lists, published first.
    pub fn lists_mut(&mut self) -> [&mut ListViewController<S>; 2] {
        [&mut self.posts, &mut self.drafts]
    }

    /// List shown by the active tab; `None` on the profile tab.
    pub fn active_list(&self) -> Option<&ListViewController<S>> {
        match self.tab {
            MyPageTab::Info => None,
            MyPageTab::Posts => Some(&self.posts),
            MyPageTab::Drafts => Some(&self.drafts),
        }
    }

    /// Mutable list shown by the active tab.
    pub fn active_list_mut(&mut self) -> Option<&mut ListViewController<S>> {
        match self.tab {
            MyPageTab::Info => None,
            MyPageTab::Posts => Some(&mut self.posts),
            MyPageTab::Drafts => Some(&mut self.drafts),
        }
    }

    /// Show `tab`, loading its list from page 1.
    ///
    /// Lists are only fetched when a user is signed in.
    pub fn select_tab(&mut self, tab: MyPageTab) {
        debug!(tab = tab.query_value(), "my page tab selected");
        self.tab = tab;
        self.load_active();
    }

    /// Collect finished fetches for both lists.
    pub fn poll(&mut self) -> bool {
        let posts = self.posts.poll();
        let drafts = self.drafts.poll();
        posts || drafts
    }

    fn load_active(&mut self) {
        if self.user.is_none() {
            return;
        }
        if let Some(list) = self.active_list_mut() {
            list.restart();
        }
    }
}
