// coro.rs - Row coroutines: one tokio task per row of the next generation

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::error::Result;
use crate::field::Field;
use crate::grid::Grid;
use crate::rule::Rule;
use crate::transition;

type RowHandle = JoinHandle<(usize, Vec<bool>)>;

/// Row coroutine that computes one row of the next generation.
async fn process_row(row_index: usize, snapshot: Arc<Grid>, rule: Rule) -> (usize, Vec<bool>) {
    let row_result = transition::next_row(&snapshot, rule, row_index);
    tokio::task::yield_now().await; // Cooperative yielding
    (row_index, row_result)
}

/// Waits for every row task and places each row by index. If one task fails
/// the rest are aborted.
async fn join_rows(handles: Vec<RowHandle>, height: usize) -> Result<Vec<Vec<bool>>> {
    let mut rows = vec![Vec::new(); height];
    let mut pending = handles.into_iter();
    while let Some(handle) = pending.next() {
        match handle.await {
            Ok((row_index, completed_row)) => rows[row_index] = completed_row,
            Err(err) => {
                for rest in pending {
                    rest.abort();
                }
                return Err(err.into());
            }
        }
    }
    Ok(rows)
}

impl Field {
    /// Advances one generation like [`Field::step`], computing every row in
    /// its own tokio task. Must run inside a tokio runtime.
    ///
    /// The field only changes once all rows are in; on error the current
    /// generation is left as it was.
    pub async fn step_rows(&mut self) -> Result<()> {
        let width = self.width();
        let height = self.height();
        let snapshot = Arc::new(self.current.clone());

        let handles: Vec<RowHandle> = (0..height)
            .map(|row| tokio::spawn(process_row(row, Arc::clone(&snapshot), self.rule)))
            .collect();
        let rows = join_rows(handles, height).await?;

        self.commit(Grid::from_row_vecs(width, rows));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_step_rows_matches_step() {
        let mut sequential = Field::new(70, 23, Rule::new(0x9e37_79b9)).unwrap();
        sequential.initialize_random(Some(5));
        let mut concurrent = sequential.clone();
        for _ in 0..10 {
            sequential.step();
            concurrent.step_rows().await.unwrap();
            assert_eq!(sequential.current(), concurrent.current());
            assert_eq!(sequential.previous(), concurrent.previous());
        }
        assert_eq!(concurrent.generation(), 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_step_rows_multi_thread() {
        let mut sequential = Field::new(130, 40, Rule::new(0x6996_a55a)).unwrap();
        sequential.initialize_random(Some(11));
        sequential.apply_central_mask();
        let mut concurrent = sequential.clone();
        for _ in 0..5 {
            sequential.step();
            concurrent.step_rows().await.unwrap();
        }
        assert_eq!(sequential.current(), concurrent.current());
    }

    fn failing_row() -> (usize, Vec<bool>) {
        panic!("row task failed")
    }

    #[tokio::test]
    async fn test_failed_row_aborts_the_rest() {
        let alive = Arc::new(());
        let guard = Arc::clone(&alive);
        let handles: Vec<RowHandle> = vec![
            tokio::spawn(async { failing_row() }),
            tokio::spawn(async move {
                let _guard = guard;
                std::future::pending::<(usize, Vec<bool>)>().await
            }),
        ];

        let result = join_rows(handles, 2).await;
        assert!(matches!(result, Err(Error::RowTask(_))));

        // The stuck row is cancelled, which drops its guard.
        tokio::time::timeout(Duration::from_secs(5), async {
            while Arc::strong_count(&alive) > 1 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("remaining row task was not aborted");
    }

    #[tokio::test]
    async fn test_join_rows_places_rows_by_index() {
        let handles: Vec<RowHandle> = vec![
            tokio::spawn(async { (1, vec![true, false]) }),
            tokio::spawn(async { (0, vec![false, true]) }),
        ];
        let rows = join_rows(handles, 2).await.unwrap();
        assert_eq!(rows, vec![vec![false, true], vec![true, false]]);
    }
}
