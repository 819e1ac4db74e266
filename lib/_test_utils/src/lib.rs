use color_eyre::eyre::ensure;

use trilogic::core::template::TaskTemplate;
use trilogic::core::trit::Trit;

/// Drives a task with exactly one free value slot through every candidate
/// value and checks that `expected`, and only `expected`, matches the answer.
pub fn check_single_slot_task(mut task: TaskTemplate, expected: Trit) -> color_eyre::Result<()> {
    let free: Vec<_> = task
        .value_slots()
        .iter()
        .copied()
        .filter(|&id| !task.is_locked(id))
        .collect();
    ensure!(free.len() == 1, "task must have exactly one free value slot, got {}", free.len());
    let free = free[0];

    println!("task = {}", task);
    for value in Trit::ALL {
        task.set_value(free, value)?;
        let result = task.evaluate()?;
        println!("X = {} gives {} (answer: {})", value, result, task.answer());
        if value == expected {
            ensure!(result == task.answer(), "expected {} to solve the task, got {}", value, result);
        } else {
            ensure!(result != task.answer(), "{} must not solve the task", value);
        }
    }

    Ok(())
}
