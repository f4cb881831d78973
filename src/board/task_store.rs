use crate::board::task::Task;

/// Authoritative, sorted collection of tasks
///
/// Tasks are kept sorted by priority rank (High, Medium, Low) and then by
/// deadline, ascending. The sort is stable, so tasks with the same priority
/// and deadline keep their relative order.
///
/// Titles are the lookup key, but the store does not enforce uniqueness:
/// `find` and `remove` act on the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in sort order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task and restore sort order
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
        self.sort();
    }

    /// Remove the first task with the given title and return it
    ///
    /// Removing an element never breaks the sort order, so no re-sort happens.
    pub fn remove(&mut self, title: &str) -> Option<Task> {
        let pos = self.position(title)?;
        Some(self.tasks.remove(pos))
    }

    /// Find the first task with the given title
    pub fn find(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.title == title)
    }

    /// Index of the first task with the given title
    pub fn position(&self, title: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.title == title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    /// Swap the task at `index` for `task`, returning the old one
    ///
    /// The caller is responsible for calling [`TaskStore::sort`] afterwards.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; obtain it from [`TaskStore::position`].
    pub fn replace(&mut self, index: usize, task: Task) -> Task {
        std::mem::replace(&mut self.tasks[index], task)
    }

    /// Re-order by (priority rank, deadline), stable on ties
    pub fn sort(&mut self) {
        self.tasks.sort_by_key(|t| (t.priority.rank(), t.deadline));
    }
}
