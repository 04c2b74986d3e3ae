//! Deferred tasks
//!
//! A [`Scheduler`] runs a task once after a delay. Dropping the returned
//! handle cancels the task if it has not run yet. The browser uses
//! `setTimeout`; [`ManualScheduler`] runs on a virtual clock for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Cancels the task when dropped
    type Handle;

    fn defer(&self, delay_ms: u32, task: Task) -> Self::Handle;
}

struct Pending {
    id: u64,
    due: u64,
    cancelled: Rc<Cell<bool>>,
    task: Task,
}

#[derive(Default)]
struct Queue {
    now: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

/// Virtual-clock scheduler; nothing runs until [`ManualScheduler::advance`]
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

/// Handle returned by [`ManualScheduler::defer`]
#[derive(Debug)]
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the virtual clock
    pub fn now(&self) -> u64 {
        self.queue.borrow().now
    }

    /// Tasks still waiting to run (cancelled ones excluded)
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .pending
            .iter()
            .filter(|p| !p.cancelled.get())
            .count()
    }

    /// Move the clock forward, running every task that falls due in order.
    /// Tasks may schedule further tasks; those run too if they fall due.
    pub fn advance(&self, ms: u64) {
        let target = self.queue.borrow().now + ms;

        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                queue.pending.retain(|p| !p.cancelled.get());
                let earliest = queue
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.id))
                    .map(|(i, _)| i);

                earliest.map(|i| {
                    let pending = queue.pending.swap_remove(i);
                    queue.now = pending.due;
                    pending
                })
            };

            // Run outside the borrow so the task can defer more work
            match next {
                Some(pending) => (pending.task)(),
                None => break,
            }
        }

        self.queue.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn defer(&self, delay_ms: u32, task: Task) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let due = queue.now + u64::from(delay_ms);
        queue.pending.push(Pending {
            id,
            due,
            cancelled: cancelled.clone(),
            task,
        });
        ManualHandle { cancelled }
    }
}
