//! Kanban task and column records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Priority::Low => "↓",
            Priority::Medium => "→",
            Priority::High => "↑",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub tags: Vec<String>,
}

impl Task {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        assignee: impl Into<String>,
        due_date: NaiveDate,
        priority: Priority,
        tags: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            assignee: assignee.into(),
            due_date,
            priority,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn assignee_initials(&self) -> String {
        initials(&self.assignee)
    }
}

/// A board column. Tasks keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    /// Hex background tint for the column header
    pub color: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

/// Upper-case first letters of each word ("Sarah Johnson" -> "SJ").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("alex  rodriguez"), "AR");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_priority_arrows() {
        assert_eq!(Priority::High.arrow(), "↑");
        assert_eq!(Priority::Low.as_str(), "low");
    }
}
