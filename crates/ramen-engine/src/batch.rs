//! Worker pool for independent evaluations.
//!
//! Indices of the input slice are queued on a crossbeam channel; each
//! scoped worker pulls an index, evaluates it, and sends `(index, result)`
//! back. Results are reassembled in input order after all workers exit.

use crossbeam_channel::unbounded;

/// Evaluate `f` on every item using up to `workers` threads.
///
/// The output has the same length and order as `items`. With one worker
/// (or one item) everything runs on the calling thread.
pub(crate) fn run_ordered<T, R, F>(items: &[T], workers: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let workers = workers.clamp(1, items.len().max(1));
    if workers == 1 {
        return items.iter().map(f).collect();
    }

    let (task_tx, task_rx) = unbounded::<usize>();
    let (result_tx, result_rx) = unbounded::<(usize, R)>();
    for index in 0..items.len() {
        // The receiver is alive until the workers below exit.
        let _ = task_tx.send(index);
    }
    drop(task_tx);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let f = &f;
            scope.spawn(move || {
                while let Ok(index) = task_rx.recv() {
                    if result_tx.send((index, f(&items[index]))).is_err() {
                        break;
                    }
                }
                // Channel drained: worker exits cleanly.
            });
        }
    });
    drop(result_tx);

    let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(items.len()).collect();
    for (index, result) in result_rx.try_iter() {
        slots[index] = Some(result);
    }
    slots.into_iter().flatten().collect()
}
