//! End-to-end list synchronization over real worker threads.
//!
//! Posts come from a JSON file through `JsonFileBackend`; fetches run on
//! `WorkerSource` threads and the tests poll like the event loop does.

use postpager::model::{
    FetchError, ListQuery, MyPageTab, PageResponse, PageSize, Route, SortKey, UserId,
};
use postpager::source::{paginate, JsonFileBackend, PostBackend, WorkerSource};
use postpager::state::{AppState, ListViewController, LoadStatus};
use postpager::view::{render_app, Styles};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

// ===== Test Helpers =====

fn posts_json(published: u32, drafts: u32) -> String {
    let entries: Vec<String> = (1..=published + drafts)
        .map(|n| {
            let status = if n > published { "temp" } else { "published" };
            format!(
                r#"{{"post_id": {n}, "post_title": "Post {n}", "user_id": "alice",
                    "created_at": "2025-01-{day:02}T00:00:00Z",
                    "post_view_count": {views}, "post_like_count": {likes},
                    "post_status": "{status}"}}"#,
                day = n % 28 + 1,
                views = n * 10,
                likes = n % 3,
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

fn write_posts(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("postpager_it_{name}.json"));
    std::fs::write(&path, contents).expect("write posts file");
    path
}

fn wait_until<B: PostBackend>(
    list: &mut ListViewController<WorkerSource<B>>,
    done: impl Fn(&ListViewController<WorkerSource<B>>) -> bool,
) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(list) && Instant::now() < deadline {
        list.poll();
        thread::sleep(Duration::from_millis(5));
    }
    assert!(done(list), "condition not reached before deadline");
}

fn loaded<B: PostBackend>(list: &ListViewController<WorkerSource<B>>) -> bool {
    list.state().status() != LoadStatus::Loading
}

/// File backend that answers some pages slowly.
struct Throttled {
    inner: JsonFileBackend,
    slow_page: u32,
}

impl PostBackend for Throttled {
    fn fetch(&self, query: &ListQuery) -> Result<PageResponse, FetchError> {
        if query.page == self.slow_page {
            thread::sleep(Duration::from_millis(200));
        }
        self.inner.fetch(query)
    }
}

// ===== Tests =====

#[test]
fn file_backed_list_loads_and_pages() {
    let path = write_posts("pages", &posts_json(10, 0));
    let backend = Arc::new(JsonFileBackend::new(&path).unwrap());
    let mut list = ListViewController::new(
        WorkerSource::new(backend, Duration::ZERO),
        ListQuery::new(PageSize::new(4).unwrap()),
    );

    list.refresh();
    wait_until(&mut list, loaded);
    assert_eq!(list.state().total_pages().get(), 3);

    list.set_page(3).unwrap();
    wait_until(&mut list, loaded);

    std::fs::remove_file(&path).ok();
    let titles: Vec<_> = list.state().items().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Post 9", "Post 10"]);
}

#[test]
fn slow_earlier_page_never_overwrites_later_one() {
    let path = write_posts("race", &posts_json(12, 0));
    let backend = Arc::new(Throttled {
        inner: JsonFileBackend::new(&path).unwrap(),
        slow_page: 2,
    });
    let mut list = ListViewController::new(
        WorkerSource::new(backend, Duration::ZERO),
        ListQuery::new(PageSize::new(4).unwrap()),
    );
    list.refresh();
    wait_until(&mut list, loaded);

    list.set_page(2).unwrap();
    list.set_page(3).unwrap();
    wait_until(&mut list, |l| l.source().in_flight() == 0);

    std::fs::remove_file(&path).ok();
    assert_eq!(list.query().page, 3);
    assert_eq!(list.state().status(), LoadStatus::Loaded);
    assert_eq!(list.state().items()[0].title, "Post 9");
}

#[test]
fn malformed_file_fails_list_and_refresh_recovers() {
    let path = write_posts("malformed", "not json");
    let backend = Arc::new(JsonFileBackend::new(&path).unwrap());
    let mut list = ListViewController::new(
        WorkerSource::new(backend, Duration::ZERO),
        ListQuery::new(PageSize::new(4).unwrap()),
    );

    list.refresh();
    wait_until(&mut list, loaded);
    assert_eq!(list.state().status(), LoadStatus::Failed);
    assert!(list.state().items().is_empty());
    assert!(list
        .state()
        .error_message()
        .is_some_and(|m| m.starts_with("Malformed posts file")));

    std::fs::write(&path, posts_json(2, 0)).unwrap();
    list.refresh();
    wait_until(&mut list, loaded);

    std::fs::remove_file(&path).ok();
    assert_eq!(list.state().status(), LoadStatus::Loaded);
    assert_eq!(list.state().items().len(), 2);
}

#[test]
fn sort_change_on_page_three_reloads_page_one() {
    let path = write_posts("sort", &posts_json(12, 0));
    let backend = Arc::new(JsonFileBackend::new(&path).unwrap());
    let mut list = ListViewController::new(
        WorkerSource::new(backend, Duration::from_millis(5)),
        ListQuery::new(PageSize::new(4).unwrap()),
    );
    list.refresh();
    wait_until(&mut list, loaded);
    list.set_page(3).unwrap();
    wait_until(&mut list, loaded);

    list.set_sort(SortKey::Popular);
    wait_until(&mut list, loaded);

    std::fs::remove_file(&path).ok();
    assert_eq!(list.query().page, 1);
    let likes: Vec<u64> = list.state().items().iter().map(|p| p.like_count).collect();
    assert!(likes.windows(2).all(|w| w[0] >= w[1]), "Popular is most liked first");
}

#[test]
fn single_page_list_renders_without_strip() {
    let path = write_posts("single", &posts_json(3, 0));
    let backend = Arc::new(JsonFileBackend::new(&path).unwrap());
    let mut state = AppState::new(
        || WorkerSource::new(Arc::clone(&backend), Duration::ZERO),
        PageSize::new(4).unwrap(),
        None,
        Route::Home,
    );
    state.mount();
    let deadline = Instant::now() + Duration::from_secs(5);
    while state.active_list().unwrap().state().is_loading() && Instant::now() < deadline {
        state.poll();
        thread::sleep(Duration::from_millis(5));
    }

    let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
    terminal
        .draw(|frame| render_app(frame, &state, &Styles::default()))
        .unwrap();
    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect();

    std::fs::remove_file(&path).ok();
    assert!(state.active_list().unwrap().controls().is_none());
    assert!(text.contains("Post 3"));
    assert!(!text.contains("Next >"));
}

#[test]
fn my_page_drafts_tab_lists_only_drafts() {
    let path = write_posts("drafts", &posts_json(5, 6));
    let backend = Arc::new(JsonFileBackend::new(&path).unwrap());
    let mut state = AppState::new(
        || WorkerSource::new(Arc::clone(&backend), Duration::ZERO),
        PageSize::new(4).unwrap(),
        Some(UserId::new("alice").unwrap()),
        Route::MyPage(MyPageTab::Drafts),
    );
    state.mount();
    let deadline = Instant::now() + Duration::from_secs(5);
    while state.active_list().unwrap().state().is_loading() && Instant::now() < deadline {
        state.poll();
        thread::sleep(Duration::from_millis(5));
    }

    std::fs::remove_file(&path).ok();
    let list = state.active_list().unwrap();
    assert_eq!(list.state().total_pages().get(), 2);
    assert!(list
        .state()
        .items()
        .iter()
        .all(|p| p.status == postpager::model::PostStatus::Draft));
}

#[test]
fn paginate_matches_backend_answer() {
    let path = write_posts("paginate", &posts_json(7, 0));
    let backend = JsonFileBackend::new(&path).unwrap();
    let mut query = ListQuery::new(PageSize::new(3).unwrap());
    query.page = 2;

    let from_backend = backend.fetch(&query).unwrap();
    let direct = paginate(&backend.load_posts().unwrap(), &query);

    std::fs::remove_file(&path).ok();
    assert_eq!(from_backend, direct);
}
