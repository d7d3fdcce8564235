//! When steps for board transfer BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::board::domain::TaskId;

#[when(r#"task "{task_id}" is dropped on "{target}""#)]
fn task_dropped_on(world: &mut BoardWorld, task_id: String, target: String) {
    world.mark_action();
    let result = run_async(world.service.drop_task(&TaskId::from(task_id.as_str()), &target));
    match result {
        Ok(outcome) => world.last_outcome = Some(outcome),
        Err(err) => world.last_error = Some(err),
    }
}

#[when(r#"task "{task_id}" is moved to category "{category}""#)]
fn task_moved_to_category(world: &mut BoardWorld, task_id: String, category: String) {
    world.mark_action();
    let result = run_async(
        world
            .service
            .move_to_category(&TaskId::from(task_id.as_str()), &category),
    );
    match result {
        Ok(outcome) => world.last_outcome = Some(outcome),
        Err(err) => world.last_error = Some(err),
    }
}

#[when(r#"task "{task_id}" is deleted"#)]
fn task_deleted(world: &mut BoardWorld, task_id: String) {
    world.mark_action();
    let result = run_async(world.service.delete_task(&TaskId::from(task_id.as_str())));
    world.last_error = result.err();
}
