// src/scheduler.rs
// Deferred-callback seam for the modal controller.
//
// The visibility flip must run only after the renderer's mutations have
// committed, and the post-close scroll reset must run after the visual
// transition. Both are "schedule a continuation later" operations; the trait
// keeps the modal testable without real time.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub type Callback = Box<dyn FnOnce() + Send + 'static>;

pub trait FrameScheduler: Send + Sync {
    /// Run `f` on the next frame, after the current batch of mutations has
    /// committed.
    fn on_next_frame(&self, f: Callback);

    /// Run `f` after `delay`.
    fn after(&self, delay: Duration, f: Callback);
}

/// Production scheduler: next-frame becomes a task-boundary yield, delays go
/// through `tokio::time::sleep`. Requires a running tokio runtime.
pub struct TokioScheduler;

impl FrameScheduler for TokioScheduler {
    fn on_next_frame(&self, f: Callback) {
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            f();
        });
    }

    fn after(&self, delay: Duration, f: Callback) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        });
    }
}

/// Deterministic scheduler for tests: callbacks queue up and run only when
/// the test pumps them.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    frames: Arc<Mutex<VecDeque<Callback>>>,
    delayed: Arc<Mutex<Vec<(Duration, Callback)>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every queued next-frame callback, in order. Returns how many ran.
    pub fn run_frames(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self
                .frames
                .lock()
                .ok()
                .and_then(|mut q| q.pop_front());
            match next {
                Some(f) => {
                    f();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }

    /// Fire every delayed callback whose delay is within `elapsed`.
    pub fn advance(&self, elapsed: Duration) -> usize {
        let due: Vec<Callback> = match self.delayed.lock() {
            Ok(mut pending) => {
                let mut due = Vec::new();
                let mut keep = Vec::new();
                for (delay, f) in pending.drain(..) {
                    if delay <= elapsed {
                        due.push(f);
                    } else {
                        keep.push((delay, f));
                    }
                }
                *pending = keep;
                due
            }
            Err(_) => Vec::new(),
        };
        let ran = due.len();
        for f in due {
            f();
        }
        ran
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn pending_delayed(&self) -> usize {
        self.delayed.lock().map(|v| v.len()).unwrap_or(0)
    }
}

impl FrameScheduler for ManualScheduler {
    fn on_next_frame(&self, f: Callback) {
        if let Ok(mut q) = self.frames.lock() {
            q.push_back(f);
        }
    }

    fn after(&self, delay: Duration, f: Callback) {
        if let Ok(mut v) = self.delayed.lock() {
            v.push((delay, f));
        }
    }
}
