//! Binary search tree over tasks keyed by deadline
//!
//! Nodes live in a `Vec` and refer to their children by index, so inserting
//! and walking a degenerate (already sorted) tree never recurses.

use crate::board::task::Task;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    task: Task,
    left: Option<usize>,
    right: Option<usize>,
}

/// Deadline-ordered index of task snapshots
///
/// Equal deadlines are inserted into the right subtree, so an in-order walk
/// yields tasks with the same deadline in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeadlineIndex {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl DeadlineIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Insert a task snapshot
    pub fn insert(&mut self, task: Task) {
        let new_index = self.nodes.len();
        let deadline = task.deadline;
        self.nodes.push(Node {
            task,
            left: None,
            right: None,
        });

        let Some(mut current) = self.root else {
            self.root = Some(new_index);
            return;
        };

        loop {
            let node = &mut self.nodes[current];
            let child = if deadline < node.task.deadline {
                &mut node.left
            } else {
                &mut node.right
            };
            match *child {
                Some(next) => current = next,
                None => {
                    *child = Some(new_index);
                    return;
                }
            }
        }
    }

    /// Discard the tree and reinsert every task in the given order
    pub fn rebuild<'a>(&mut self, tasks: impl IntoIterator<Item = &'a Task>) {
        self.clear();
        for task in tasks {
            self.insert(task.clone());
        }
    }

    /// All tasks in deadline order
    pub fn in_order(&self) -> Vec<&Task> {
        self.walk(None, None)
    }

    /// Tasks with `from <= deadline <= to`, in deadline order
    pub fn range(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Task> {
        if from > to {
            return Vec::new();
        }
        self.walk(Some(from), Some(to))
    }

    /// Task with the earliest deadline (first inserted among ties)
    pub fn earliest(&self) -> Option<&Task> {
        let mut current = self.root?;
        while let Some(left) = self.nodes[current].left {
            current = left;
        }
        Some(&self.nodes[current].task)
    }

    /// In-order walk, skipping subtrees that fall entirely outside the bounds
    fn walk(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Vec<&Task> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root;

        loop {
            while let Some(index) = current {
                let node = &self.nodes[index];
                stack.push(index);
                // Left subtree only holds strictly earlier deadlines
                current = if from.is_none_or(|f| node.task.deadline > f) {
                    node.left
                } else {
                    None
                };
            }

            let Some(index) = stack.pop() else {
                break;
            };
            let node = &self.nodes[index];
            let deadline = node.task.deadline;
            if from.is_none_or(|f| deadline >= f) && to.is_none_or(|t| deadline <= t) {
                out.push(&node.task);
            }
            current = if to.is_none_or(|t| deadline <= t) {
                node.right
            } else {
                None
            };
        }

        out
    }
}
