//! Time control and search limits.
//!
//! A search gets a wall-clock deadline, either as a duration measured from
//! `start()` or as an absolute instant handed in by the driver. Engines poll
//! it cooperatively; nothing here blocks or yields.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Hard ceiling on iterative deepening.
pub const MAX_DEPTH: u8 = 50;

/// Search limits that control when an engine should stop searching.
///
/// Engines respect both the depth and the time limit and stop at whichever
/// comes first. If time runs out, the engine returns the result of the
/// deepest iteration it finished.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    /// Time controller for checking if search should stop
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            time_control: TimeControl::new(None),
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Create limits with only a time constraint.
    pub fn time(move_time: Duration) -> Self {
        Self::depth_and_time(MAX_DEPTH, move_time)
    }

    /// Search until an absolute instant.
    pub fn until(deadline: Instant) -> Self {
        Self {
            depth: MAX_DEPTH,
            time_control: TimeControl::until(deadline),
        }
    }

    /// Depth cap actually used by iterative deepening.
    pub fn max_depth(&self) -> u8 {
        self.depth.min(MAX_DEPTH)
    }

    /// Check if search should stop due to time limit.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.check_time()
    }

    /// Start the time control clock. Call this when search begins.
    pub fn start(&mut self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Deadline tracker with a shared stop flag.
///
/// Clones share the flag, so any clone can stop a running search.
#[derive(Debug, Clone)]
pub struct TimeControl {
    /// Shared stop flag
    stopped: Arc<AtomicBool>,
    /// Budget measured from `start()` (None = no relative budget)
    time_limit: Option<Duration>,
    /// Instant after which the search must stop
    deadline: Option<Instant>,
    /// How often to read the clock, in nodes
    check_interval: u64,
}

impl TimeControl {
    /// Create a new time controller.
    ///
    /// # Arguments
    /// * `time_limit` - Maximum time allowed for search (None = infinite)
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            time_limit,
            deadline: None,
            check_interval: 1,
        }
    }

    /// Create a time controller that expires at a fixed instant.
    pub fn until(deadline: Instant) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            time_limit: None,
            deadline: Some(deadline),
            check_interval: 1,
        }
    }

    /// Read the clock only every `interval` nodes.
    pub fn with_check_interval(mut self, interval: u64) -> Self {
        self.check_interval = interval.max(1);
        self
    }

    /// Start the clock. A relative budget starts counting from here.
    pub fn start(&mut self) {
        if let Some(limit) = self.time_limit {
            self.deadline = Some(Instant::now() + limit);
        }
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Fast check of the stop flag alone.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Check the clock and latch the stop flag once the deadline has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            self.stop();
            return true;
        }

        false
    }

    /// Returns true every `check_interval` nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(self.check_interval)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Get remaining time (None if no deadline is set).
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
