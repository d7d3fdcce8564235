//! Flushing and reloading through the in-memory store.

use std::sync::Arc;

use super::helpers::{MemoryBoard, listed, memory_board};
use rstest::rstest;
use serde_json::json;
use taskboard::board::{
    adapters::memory::InMemoryBoardStore,
    domain::{ContainerKey, TaskId},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_mutation_flushes_exactly_once(mut memory_board: MemoryBoard) -> eyre::Result<()> {
    let task_id = memory_board.seed("a", ContainerKey::ToDo).await?;
    memory_board
        .service
        .drop_task(&task_id, "target-done-table")
        .await?;
    memory_board.service.delete_task(&task_id).await?;
    memory_board.service.clear_all().await;

    eyre::ensure!(
        memory_board.store.save_count() == 4,
        "expected four flushes, found {}",
        memory_board.store.save_count()
    );
    eyre::ensure!(
        memory_board.renderer.refresh_count() == 4,
        "expected four refreshes"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reload_reproduces_board(mut memory_board: MemoryBoard) -> eyre::Result<()> {
    memory_board.seed("a", ContainerKey::ToDo).await?;
    memory_board.seed("b", ContainerKey::AwaitFeedback).await?;
    memory_board
        .service
        .drop_task(&TaskId::from("a"), "target-await-feedback-table")
        .await?;

    let mut reloaded = MemoryBoard::over(Arc::clone(&memory_board.store));
    let loaded = reloaded.service.load().await;

    eyre::ensure!(loaded == 2, "expected two tasks, loaded {loaded}");
    eyre::ensure!(
        reloaded.service.board() == memory_board.service.board(),
        "reloaded board differs"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn payload_without_collection_is_rebuilt_from_sublists() -> eyre::Result<()> {
    let payload = json!({
        "allTasks": [],
        "tasksToDo": [{ "id": "a", "title": "A", "containerKey": "for-To-Do-Container" }],
        "tasksDone": [{ "id": "b", "title": "B", "containerKey": "for-To-Do-Container" }],
    });
    let store = Arc::new(InMemoryBoardStore::with_payload(payload.to_string()));
    let mut board = MemoryBoard::over(store);

    let loaded = board.service.load().await;

    let state = board.service.board();
    eyre::ensure!(loaded == 2, "expected two tasks");
    eyre::ensure!(listed(state, ContainerKey::Done) == vec!["b"], "sub-list key not applied");
    eyre::ensure!(state.is_partitioned(), "partition broken");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_payload_loads_empty_and_is_overwritten() -> eyre::Result<()> {
    let store = Arc::new(InMemoryBoardStore::with_payload("[1, 2"));
    let mut board = MemoryBoard::over(Arc::clone(&store));

    eyre::ensure!(board.service.load().await == 0, "corrupt payload produced tasks");
    board.seed("fresh", ContainerKey::InProgress).await?;

    let payload = store
        .payload()
        .ok_or_else(|| eyre::eyre!("store holds no payload"))?;
    let decoded: serde_json::Value = serde_json::from_str(&payload)?;
    eyre::ensure!(
        decoded.pointer("/tasksInProgress/0/id") == Some(&json!("fresh")),
        "flush did not replace corrupt payload"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_flush_is_reported_but_change_stands(
    mut memory_board: MemoryBoard,
) -> eyre::Result<()> {
    let task_id = memory_board.seed("a", ContainerKey::ToDo).await?;
    memory_board.store.reject_saves(true);

    memory_board.service.delete_task(&task_id).await?;

    eyre::ensure!(
        memory_board.service.last_flush_error().is_some(),
        "flush failure not recorded"
    );
    eyre::ensure!(memory_board.service.board().is_empty(), "delete rolled back");
    eyre::ensure!(memory_board.store.save_count() == 1, "rejected save was counted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn oddly_cased_priority_does_not_drop_other_tasks() -> eyre::Result<()> {
    let payload = json!({
        "allTasks": [
            { "id": "a", "title": "A", "priority": "medium", "containerKey": "for-To-Do-Container" },
            { "id": "b", "title": "B", "priority": "Urgent", "containerKey": "for-Done-Container" },
        ],
    });
    let store = Arc::new(InMemoryBoardStore::with_payload(payload.to_string()));
    let mut board = MemoryBoard::over(Arc::clone(&store));

    eyre::ensure!(board.service.load().await == 2, "stored tasks were dropped");
    board.seed("c", ContainerKey::ToDo).await?;

    let saved: serde_json::Value = serde_json::from_str(
        &store
            .payload()
            .ok_or_else(|| eyre::eyre!("store holds no payload"))?,
    )?;
    let ids: Vec<_> = saved
        .pointer("/tasksToDo")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| eyre::eyre!("missing to-do list"))?
        .iter()
        .filter_map(|task| task.get("id").and_then(serde_json::Value::as_str))
        .collect();
    eyre::ensure!(ids == ["a", "c"], "unexpected stored to-do list {ids:?}");
    Ok(())
}
