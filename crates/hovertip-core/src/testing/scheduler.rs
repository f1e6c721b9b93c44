use std::cell::{Cell, RefCell};

use crate::surface::{Clock, Scheduler, TimerId};

struct Task {
    id: TimerId,
    due: f64,
    run: Box<dyn FnOnce()>,
}

/// Virtual clock plus timer queue. Time only moves in [`ManualScheduler::advance`].
pub struct ManualScheduler {
    now: Cell<f64>,
    next_id: Cell<u64>,
    queue: RefCell<Vec<Task>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::starting_at(0.0)
    }

    pub fn starting_at(now_ms: f64) -> Self {
        Self { now: Cell::new(now_ms), next_id: Cell::new(1), queue: RefCell::new(Vec::new()) }
    }

    /// Move time forward, running every task that falls due, in due order
    /// (ties in scheduling order). Tasks scheduled by tasks run too if they
    /// fall inside the step.
    pub fn advance(&self, ms: u32) {
        let target = self.now.get() + f64::from(ms);
        while let Some(task) = self.pop_due(target) {
            self.now.set(task.due);
            (task.run)();
        }
        self.now.set(target);
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn pop_due(&self, target: f64) -> Option<Task> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= target)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.0.cmp(&b.id.0)))
            .map(|(index, _)| index)?;
        Some(queue.remove(index))
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let due = self.now.get() + f64::from(delay_ms);
        self.queue.borrow_mut().push(Task { id, due, run: task });
        id
    }

    fn cancel(&self, id: TimerId) {
        self.queue.borrow_mut().retain(|task| task.id != id);
    }
}
