//! Mixed operation sequences never break the container partition.

use super::helpers::{MemoryBoard, listed, memory_board};
use rstest::rstest;
use taskboard::board::domain::{ContainerKey, TaskId};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mixed_operations_keep_every_task_in_one_container(
    mut memory_board: MemoryBoard,
) -> eyre::Result<()> {
    for (id, container) in [
        ("a", ContainerKey::ToDo),
        ("b", ContainerKey::ToDo),
        ("c", ContainerKey::InProgress),
        ("d", ContainerKey::Done),
    ] {
        memory_board.seed(id, container).await?;
    }
    let service = &mut memory_board.service;

    service.drop_task(&TaskId::from("a"), "target-done-table").await?;
    service.move_to_category(&TaskId::from("c"), "to-do-category").await?;
    service.drop_task(&TaskId::from("b"), "target-nowhere").await?;
    service.transfer(&TaskId::from("d"), ContainerKey::Done).await?;
    service.delete_task(&TaskId::from("b")).await?;
    service
        .move_to_category(&TaskId::from("a"), "await-feedback-category")
        .await?;

    let board = service.board();
    eyre::ensure!(board.is_partitioned(), "partition broken");
    eyre::ensure!(board.len() == 3, "expected three tasks, found {}", board.len());
    eyre::ensure!(listed(board, ContainerKey::ToDo) == vec!["c"], "to-do order");
    eyre::ensure!(
        listed(board, ContainerKey::AwaitFeedback) == vec!["a"],
        "await-feedback order"
    );
    eyre::ensure!(listed(board, ContainerKey::Done) == vec!["d"], "done order");
    for task in board.tasks() {
        eyre::ensure!(
            board.locate(task.id()) == Some(task.container_key()),
            "task {} listed outside its container",
            task.id()
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moved_tasks_join_the_tail_in_move_order(
    mut memory_board: MemoryBoard,
) -> eyre::Result<()> {
    for id in ["x", "y", "z"] {
        memory_board.seed(id, ContainerKey::ToDo).await?;
    }
    for id in ["z", "x", "y"] {
        memory_board
            .service
            .drop_task(&TaskId::from(id), "target-in-progress-table")
            .await?;
    }

    let board = memory_board.service.board();
    eyre::ensure!(
        listed(board, ContainerKey::InProgress) == vec!["z", "x", "y"],
        "tail order not preserved"
    );
    eyre::ensure!(board.container(ContainerKey::ToDo).is_empty(), "to-do not drained");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_then_reusing_identifiers_works(
    mut memory_board: MemoryBoard,
) -> eyre::Result<()> {
    memory_board.seed("a", ContainerKey::Done).await?;
    memory_board.service.clear_all().await;
    memory_board.seed("a", ContainerKey::ToDo).await?;

    let board = memory_board.service.board();
    eyre::ensure!(board.len() == 1, "expected one task");
    eyre::ensure!(listed(board, ContainerKey::ToDo) == vec!["a"], "task not re-added");
    Ok(())
}
