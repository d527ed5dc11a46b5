//! Per-frame task scheduling, independent of the browser.
//!
//! A [`FrameDriver`] owns a task and decides after every tick whether another
//! frame should be requested. A failing tick is logged and the loop carries on;
//! only `FrameStatus::Finished` or a cancelled token stops it.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("frame failed: {0}")]
pub struct FrameError(pub String);

impl From<wasm_bindgen::JsValue> for FrameError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FrameError(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Finished,
}

/// Work run once per display refresh. `now` is the frame timestamp in ms.
pub trait FrameTask {
    fn frame(&mut self, now: f64) -> Result<FrameStatus, FrameError>;
}

/// Shared stop flag for a running loop.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

pub struct FrameDriver<T> {
    task: T,
    token: CancellationToken,
    frames: u64,
    failures: u64,
}

impl<T: FrameTask> FrameDriver<T> {
    pub fn new(task: T, token: CancellationToken) -> Self {
        Self {
            task,
            token,
            frames: 0,
            failures: 0,
        }
    }

    /// Run one tick. Returns whether the next frame should be scheduled.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        self.frames += 1;
        match self.task.frame(now) {
            Ok(FrameStatus::Continue) => !self.token.is_cancelled(),
            Ok(FrameStatus::Finished) => false,
            Err(err) => {
                self.failures += 1;
                log::warn!("frame {} failed ({} so far): {err}", self.frames, self.failures);
                !self.token.is_cancelled()
            }
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn task(&self) -> &T {
        &self.task
    }
}
