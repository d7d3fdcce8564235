//! Then steps for board transfer BDD scenarios.

use super::world::BoardWorld;
use eyre::{ensure, eyre};
use rstest_bdd_macros::then;
use taskboard::board::{
    domain::{BoardDomainError, ContainerKey, TransferOutcome},
    services::BoardServiceError,
};

fn parse_container(container: &str) -> Result<ContainerKey, eyre::Report> {
    ContainerKey::try_from(container)
        .map_err(|err| eyre!("invalid container in scenario: {err}"))
}

#[then(r#"container "{container}" lists "{expected}""#)]
fn container_lists(
    world: &BoardWorld,
    container: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let key = parse_container(&container)?;
    let actual: Vec<String> = world
        .service
        .board()
        .container(key)
        .task_ids()
        .iter()
        .map(ToString::to_string)
        .collect();
    let wanted: Vec<&str> = expected.split(',').map(str::trim).collect();
    ensure!(actual == wanted, "expected {wanted:?} in {container}, found {actual:?}");
    Ok(())
}

#[then(r#"container "{container}" is empty"#)]
fn container_is_empty(world: &BoardWorld, container: String) -> Result<(), eyre::Report> {
    let key = parse_container(&container)?;
    let list = world.service.board().container(key);
    ensure!(list.is_empty(), "{container} still holds {} tasks", list.len());
    Ok(())
}

#[then("the board was flushed {count:u64} time")]
fn flushed_once(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    assert_flushes(world, count)
}

#[then("the board was flushed {count:u64} times")]
fn flushed_times(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    assert_flushes(world, count)
}

fn assert_flushes(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let before = world
        .saves_before_action
        .ok_or_else(|| eyre!("no action was taken in this scenario"))?;
    let flushes = world.store.save_count().saturating_sub(before);
    let expected = usize::try_from(count)?;
    ensure!(flushes == expected, "expected {expected} flushes, found {flushes}");
    Ok(())
}

#[then("every task sits in exactly one container")]
fn partition_holds(world: &BoardWorld) -> Result<(), eyre::Report> {
    ensure!(
        world.service.board().is_partitioned(),
        "container partition is broken"
    );
    Ok(())
}

#[then("the move was ignored")]
fn move_ignored(world: &BoardWorld) -> Result<(), eyre::Report> {
    ensure!(
        world.last_outcome == Some(TransferOutcome::Ignored),
        "expected an ignored move, found {:?}",
        world.last_outcome
    );
    Ok(())
}

#[then("the last request failed with task not found")]
fn failed_with_not_found(world: &BoardWorld) -> Result<(), eyre::Report> {
    ensure!(
        matches!(
            world.last_error,
            Some(BoardServiceError::Domain(BoardDomainError::TaskNotFound(_)))
        ),
        "expected task not found, found {:?}",
        world.last_error
    );
    Ok(())
}

#[then("the last flush failed")]
fn last_flush_failed(world: &BoardWorld) -> Result<(), eyre::Report> {
    ensure!(
        world.service.last_flush_error().is_some(),
        "flush failure was not recorded"
    );
    Ok(())
}
