//! Pure state transitions

use super::{Action, ActionError, CompletedTask, TimerState};

/// Compute the state that follows `state` after `action`.
///
/// Never mutates its input. A refused action returns an error and the caller
/// keeps the previous state.
pub fn reduce(state: &TimerState, action: &Action) -> Result<TimerState, ActionError> {
    let next = match action {
        Action::DecrementSecond => TimerState {
            time: if state.running {
                state.time.saturating_sub(1)
            } else {
                state.time
            },
            ..state.clone()
        },
        Action::ToggleRunning => TimerState {
            running: !state.running,
            ..state.clone()
        },
        Action::Reset => TimerState {
            time: state.start_time,
            ..state.clone()
        },
        Action::ChangeTask(task) => TimerState {
            task: task.clone(),
            ..state.clone()
        },
        Action::CompleteTask { time_end } => {
            let mut tasks = state.tasks.clone();
            tasks.push(CompletedTask::new(state.task.clone(), *time_end));
            TimerState {
                tasks,
                ..state.clone()
            }
        }
        Action::RemoveTask(index) => {
            if *index >= state.tasks.len() {
                return Err(ActionError::TaskIndexOutOfRange {
                    index: *index,
                    len: state.tasks.len(),
                });
            }
            let mut tasks = state.tasks.clone();
            tasks.remove(*index);
            TimerState {
                tasks,
                ..state.clone()
            }
        }
        Action::ToggleEditStartTime => TimerState {
            edit_start_time: !state.edit_start_time,
            running: false,
            ..state.clone()
        },
        Action::ChangeStartTime(start_time) => TimerState {
            start_time: *start_time,
            time: *start_time,
            ..state.clone()
        },
    };

    Ok(next)
}
