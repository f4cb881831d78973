use crate::board::task::Task;
use crate::board::task_store::TaskStore;
use std::collections::VecDeque;

/// A recorded, invertible mutation of the task store
///
/// Every payload is an owned snapshot taken when the mutation happened, so
/// later changes to the live task never leak into history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Task as it existed right after creation
    Add(Task),
    /// Task as it existed right before removal
    Delete(Task),
    /// Task before and after an edit
    Edit { before: Task, after: Task },
}

impl Action {
    /// Apply the inverse of this action to the store
    fn revert(&self, store: &mut TaskStore) {
        match self {
            Action::Add(snapshot) => {
                store.remove(&snapshot.title);
            }
            Action::Delete(snapshot) => store.add(snapshot.clone()),
            Action::Edit { before, after } => {
                store.remove(&after.title);
                store.add(before.clone());
            }
        }
    }

    /// Apply this action to the store again
    fn replay(&self, store: &mut TaskStore) {
        match self {
            Action::Add(snapshot) => store.add(snapshot.clone()),
            Action::Delete(snapshot) => {
                store.remove(&snapshot.title);
            }
            Action::Edit { before, after } => {
                store.remove(&before.title);
                store.add(after.clone());
            }
        }
    }

    /// Short human-readable description (e.g., "add 'Essay'")
    pub fn describe(&self) -> String {
        match self {
            Action::Add(t) => format!("add '{}'", t.title),
            Action::Delete(t) => format!("delete '{}'", t.title),
            Action::Edit { before, after } if before.title != after.title => {
                format!("edit '{}' (renamed to '{}')", before.title, after.title)
            }
            Action::Edit { after, .. } => format!("edit '{}'", after.title),
        }
    }
}

/// Undo/redo log
///
/// `history` holds undoable actions and `future` holds redoable ones, most
/// recent last in both. An action lives in exactly one of the two stacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLog {
    history: VecDeque<Action>,
    future: Vec<Action>,
    /// Maximum number of undoable actions kept (None = unlimited)
    history_limit: Option<usize>,
}

impl CommandLog {
    /// Create a new empty log with unlimited history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty log that keeps at most `limit` undoable actions
    pub fn with_history_limit(limit: Option<usize>) -> Self {
        Self {
            history_limit: limit,
            ..Self::default()
        }
    }

    /// Record a fresh mutation
    ///
    /// Clears the redo path: once a new mutation happens, previously undone
    /// actions can no longer be redone.
    pub fn record(&mut self, action: Action) {
        self.future.clear();
        self.history.push_back(action);
        if let Some(limit) = self.history_limit {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }
    }

    /// Undo the most recent action against `store`
    ///
    /// Returns the undone action, or `None` if there was nothing to undo
    /// (in which case neither the log nor the store changes).
    pub fn undo(&mut self, store: &mut TaskStore) -> Option<&Action> {
        let action = self.history.pop_back()?;
        action.revert(store);
        self.future.push(action);
        self.future.last()
    }

    /// Redo the most recently undone action against `store`
    ///
    /// Returns the redone action, or `None` if there was nothing to redo.
    pub fn redo(&mut self, store: &mut TaskStore) -> Option<&Action> {
        let action = self.future.pop()?;
        action.replay(store);
        self.history.push_back(action);
        self.history.back()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Action that the next undo would revert
    pub fn peek_undo(&self) -> Option<&Action> {
        self.history.back()
    }

    /// Action that the next redo would replay
    pub fn peek_redo(&self) -> Option<&Action> {
        self.future.last()
    }
}
