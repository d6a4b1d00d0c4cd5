//! Kanban board structure and derived counts.
//!
//! Counts are recomputed from the columns on every call and never stored.

use crate::models::task::{Column, Task};

/// Board-level aggregates shown under the columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    pub total: usize,
    pub in_progress: usize,
    pub in_review: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    /// Task count per column, in column order.
    pub fn column_counts(&self) -> Vec<(&str, usize)> {
        self.columns
            .iter()
            .map(|column| (column.id.as_str(), column.task_count()))
            .collect()
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::task_count).sum()
    }

    fn count_in(&self, id: &str) -> usize {
        self.column(id).map_or(0, Column::task_count)
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            total: self.total_tasks(),
            in_progress: self.count_in("in-progress"),
            in_review: self.count_in("review"),
            completed: self.count_in("done"),
        }
    }

    /// Look up a task and the column holding it.
    pub fn find_task(&self, id: u32) -> Option<(&Column, &Task)> {
        self.columns.iter().find_map(|column| {
            column
                .tasks
                .iter()
                .find(|task| task.id == id)
                .map(|task| (column, task))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed;
    use pretty_assertions::assert_eq;

    fn board() -> Board {
        Board::new(seed::kanban_columns())
    }

    #[test]
    fn test_seeded_column_counts() {
        let board = board();
        let counts: Vec<usize> = board.column_counts().into_iter().map(|(_, n)| n).collect();
        assert_eq!(counts, vec![2, 2, 1, 2]);
    }

    #[test]
    fn test_total_matches_sum_of_columns() {
        let board = board();
        let sum: usize = board.column_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(board.total_tasks(), sum);
        assert_eq!(
            board.stats(),
            BoardStats {
                total: 7,
                in_progress: 2,
                in_review: 1,
                completed: 2,
            }
        );
    }

    #[test]
    fn test_column_order_is_fixed() {
        let board = board();
        let ids: Vec<&str> = board.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["todo", "in-progress", "review", "done"]);
    }

    #[test]
    fn test_find_task() {
        let board = board();
        let (column, task) = board.find_task(5).unwrap();
        assert_eq!(column.id, "review");
        assert_eq!(task.title, "Performance Optimization");
        assert!(board.find_task(100).is_none());
    }

    #[test]
    fn test_every_task_in_exactly_one_column() {
        let board = board();
        for id in 1..=7 {
            let owners = board
                .columns()
                .iter()
                .filter(|c| c.tasks.iter().any(|t| t.id == id))
                .count();
            assert_eq!(owners, 1, "task {id}");
        }
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new(Vec::new());
        assert_eq!(board.stats(), BoardStats::default());
    }
}
