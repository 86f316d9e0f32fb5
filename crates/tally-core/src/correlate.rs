use crate::{CorrelatedTask, Error, OwnerIndex, Result, Task};

/// Join each task to its owner, keeping task order.
///
/// Fails on the first task whose owner id is missing from `owners`; such a
/// task is never dropped or attributed to somebody else.
pub fn correlate(tasks: &[Task], owners: &OwnerIndex) -> Result<Vec<CorrelatedTask>> {
    let correlated = tasks
        .iter()
        .map(|task| -> Result<CorrelatedTask> {
            let owner = owners
                .get(task.owner_id)
                .ok_or(Error::UnresolvedOwnerReference(task.owner_id))?;

            Ok(CorrelatedTask {
                owner_id: owner.id,
                username: owner.username.clone(),
                title: task.title.clone(),
                completed: task.completed,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "Correlated {} tasks across {} known owners",
        correlated.len(),
        owners.len()
    );

    Ok(correlated)
}
