//! Given steps for board transfer BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::{domain::ContainerKey, services::CreateTaskRequest};

#[given(r#"a task "{task_id}" in "{container}""#)]
fn task_in_container(
    world: &mut BoardWorld,
    task_id: String,
    container: String,
) -> Result<(), eyre::Report> {
    let key = ContainerKey::try_from(container.as_str())
        .map_err(|err| eyre::eyre!("invalid container in scenario: {err}"))?;
    let request = CreateTaskRequest::new(format!("Scenario task {task_id}"))
        .with_id(task_id)
        .in_container(key);
    run_async(world.service.create_task(request)).wrap_err("seed scenario task")?;
    Ok(())
}

#[given("the store rejects writes")]
fn store_rejects_writes(world: &mut BoardWorld) {
    world.store.reject_saves(true);
}
