// tests/sync_step.rs
//! The sync step's write pattern: one append call carrying all blocks
//! (even zero), one row creation per link, and no coupling between the
//! two paths.

mod common;

use common::{test_config, RecordingRepository};
use notion_favsync::{sync, FavoriteLink, ParagraphBlock, RowProperties};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn links(values: &[&str]) -> Vec<FavoriteLink> {
    values.iter().map(|value| FavoriteLink::new(*value)).collect()
}

#[tokio::test]
async fn an_empty_set_still_issues_one_empty_append_and_no_rows() {
    let repo = RecordingRepository::default();
    let config = test_config(PathBuf::from("unused.json"));

    sync::run(&repo, &config, &[]).await;

    let appended = repo.appended.lock().unwrap();
    assert_eq!(appended.len(), 1, "exactly one append call");
    assert!(appended[0].is_empty(), "with zero blocks");
    assert_eq!(repo.created.lock().unwrap().len(), 0);
}

#[tokio::test]
async fn two_links_become_two_blocks_in_one_append_and_two_rows() {
    let repo = RecordingRepository::default();
    let config = test_config(PathBuf::from("unused.json"));

    sync::run(&repo, &config, &links(&["L1", "L2"])).await;

    let appended = repo.appended.lock().unwrap();
    assert_eq!(appended.len(), 1, "exactly one append call");
    assert_eq!(
        appended[0],
        vec![
            ParagraphBlock::from_text("L1"),
            ParagraphBlock::from_text("L2"),
        ]
    );

    let created = repo.created.lock().unwrap();
    assert_eq!(created.len(), 2, "one row per link");
    assert_eq!(created[0].0, config.database_id);
    assert_eq!(created[0].1, RowProperties::titled("L1"));
    assert_eq!(created[1].1, RowProperties::titled("L2"));
}

#[tokio::test]
async fn a_failed_append_does_not_stop_row_creation() {
    let repo = RecordingRepository {
        fail_append: true,
        ..Default::default()
    };
    let config = test_config(PathBuf::from("unused.json"));

    sync::run(&repo, &config, &links(&["L1"])).await;

    assert_eq!(repo.appended.lock().unwrap().len(), 1);
    assert_eq!(
        repo.created.lock().unwrap().len(),
        1,
        "row creation proceeds after a failed append"
    );
}

#[tokio::test]
async fn a_failed_row_creation_does_not_stop_later_rows() {
    let repo = RecordingRepository {
        fail_create: true,
        ..Default::default()
    };
    let config = test_config(PathBuf::from("unused.json"));

    sync::run(&repo, &config, &links(&["L1", "L2"])).await;

    assert_eq!(
        repo.created.lock().unwrap().len(),
        2,
        "every link gets its attempt"
    );
}
