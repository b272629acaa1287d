use crate::error::BenchError;

/// Identifies a task within a run of [`run_rounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    /// The round the task belongs to, starting at 0.
    pub round: usize,
    /// The index of the task within its round, starting at 0.
    pub index: usize,
}

/// Run `num_rounds` sequential rounds of `num_tasks` parallel tasks.
///
/// Every round spawns one OS thread per task and joins all of them before the
/// next round starts, so no task of round `n + 1` starts before every task of
/// round `n` has finished. Tasks of the same round run in no particular order
/// and share nothing but the borrowed closure.
///
/// A round always runs to completion. Once it is joined, the first failure of
/// the round (a task error, a panic, or a thread that could not be spawned)
/// stops the run and is returned.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use firlab_bench::run_rounds;
///
/// let counter = AtomicUsize::new(0);
///
/// run_rounds(3, 4, |_| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(counter.load(Ordering::SeqCst), 12);
/// ```
pub fn run_rounds<F>(num_rounds: usize, num_tasks: usize, task: F) -> Result<(), BenchError>
where
    F: Fn(TaskId) -> Result<(), BenchError> + Sync,
{
    let task = &task;

    for round in 0..num_rounds {
        let results: Vec<Result<(), BenchError>> = std::thread::scope(|s| {
            // launch the whole round first
            let handles = (0..num_tasks)
                .map(|index| {
                    let id = TaskId { round, index };
                    let handle = std::thread::Builder::new()
                        .name(format!("fir-worker-{round}-{index}"))
                        .spawn_scoped(s, move || task(id));
                    (id, handle)
                })
                .collect::<Vec<_>>();

            // then wait for every task of the round
            handles
                .into_iter()
                .map(|(id, handle)| match handle {
                    Ok(handle) => handle.join().unwrap_or(Err(BenchError::WorkerPanicked {
                        round: id.round,
                        index: id.index,
                    })),
                    Err(err) => Err(BenchError::Spawn(err)),
                })
                .collect()
        });

        log::debug!("round {round} joined {num_tasks} tasks");

        if let Some(err) = results.into_iter().find_map(Result::err) {
            return Err(err);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    #[test]
    fn test_round_barrier() -> Result<(), BenchError> {
        let num_rounds = 5;
        let num_tasks = 6;
        let completed = AtomicUsize::new(0);
        let violated = AtomicBool::new(false);

        run_rounds(num_rounds, num_tasks, |id| {
            // every task of the previous rounds must be done
            if completed.load(Ordering::SeqCst) < id.round * num_tasks {
                violated.store(true, Ordering::SeqCst);
            }
            std::thread::sleep(Duration::from_millis(2 * (id.index as u64 % 3)));
            completed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })?;

        assert!(!violated.load(Ordering::SeqCst));
        assert_eq!(completed.load(Ordering::SeqCst), num_rounds * num_tasks);
        Ok(())
    }

    #[test]
    fn test_every_task_id_runs_once() -> Result<(), BenchError> {
        let seen = Mutex::new(HashSet::new());
        run_rounds(3, 4, |id| {
            let inserted = seen.lock().map(|mut s| s.insert(id)).unwrap_or(false);
            assert!(inserted);
            Ok(())
        })?;
        let seen = seen.into_inner().unwrap_or_default();
        assert_eq!(seen.len(), 12);
        Ok(())
    }

    #[test]
    fn test_zero_rounds() -> Result<(), BenchError> {
        let counter = AtomicUsize::new(0);
        run_rounds(0, 8, |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })?;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        Ok(())
    }

    #[test]
    fn test_error_stops_after_round() {
        let counter = AtomicUsize::new(0);
        let res = run_rounds(4, 3, |id| {
            counter.fetch_add(1, Ordering::SeqCst);
            if id.round == 1 && id.index == 2 {
                return Err(BenchError::InvalidThreadCount(0));
            }
            Ok(())
        });
        assert!(matches!(res, Err(BenchError::InvalidThreadCount(0))));
        // the failing round still completes, later rounds never start
        assert_eq!(counter.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_panic_is_reported() {
        let res = run_rounds(2, 2, |id| {
            if id.round == 0 && id.index == 1 {
                panic!("boom");
            }
            Ok(())
        });
        assert!(matches!(
            res,
            Err(BenchError::WorkerPanicked { round: 0, index: 1 })
        ));
    }
}
