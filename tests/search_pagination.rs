use clipfloat::clipboard::MemoryClipboard;
use clipfloat::gui::ClipApp;
use clipfloat::pager::{page_count, PAGE_SIZE};
use clipfloat::settings::Settings;
use std::path::PathBuf;

fn app_with_clips(count: usize) -> ClipApp {
    let settings = Settings {
        clips: (0..count).map(|n| format!("snippet {n:02}")).collect(),
        ..Settings::default()
    };
    ClipApp::new(
        settings,
        PathBuf::from("settings.json"),
        Box::new(MemoryClipboard::default()),
    )
}

#[test]
fn persisted_clips_are_browsable_page_by_page() {
    let mut app = app_with_clips(15);
    assert_eq!(app.filtered.len(), 15);
    assert_eq!(page_count(app.filtered.len(), PAGE_SIZE), 3);

    assert!(!app.pager.has_prev());
    assert!(app.pager.next(app.filtered.len()));
    assert!(app.pager.next(app.filtered.len()));
    assert!(!app.pager.next(app.filtered.len()));
    assert_eq!(app.pager.label(app.filtered.len()), "3/3");
}

#[test]
fn searching_narrows_the_view_and_returns_to_page_one() {
    let mut app = app_with_clips(15);
    app.pager.goto(2, app.filtered.len());

    app.set_query("SNIPPET 1");
    assert_eq!(app.pager.current(), 0);
    // snippet 10 .. snippet 14
    assert_eq!(app.filtered.len(), 5);
    assert!(app.filtered.iter().all(|c| c.starts_with("snippet 1")));

    app.set_query("");
    assert_eq!(app.filtered.len(), 15);
}

#[test]
fn mutations_flow_through_to_the_filtered_view() {
    let mut app = app_with_clips(3);
    app.set_query("snippet");
    assert_eq!(app.filtered.len(), 3);

    app.delete_clip("snippet 01");
    assert_eq!(app.filtered, ["snippet 00", "snippet 02"]);

    app.edit_clip("snippet 02", "renamed 02");
    // the edit no longer matches the query, so it drops out of the view
    assert_eq!(app.filtered, ["snippet 00"]);
    assert_eq!(app.store.all(), ["snippet 00", "renamed 02"]);
}
