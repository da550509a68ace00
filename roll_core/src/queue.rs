//! Caller-side roll queue
//!
//! The engine has no notion of a roll "in progress". Sheets that animate
//! rolls keep one request in flight at a time with a [`RollQueue`]: new
//! requests wait in FIFO order until the current one completes.

use std::collections::VecDeque;

/// FIFO gate allowing one in-flight request
#[derive(Debug, Clone)]
pub struct RollQueue<T> {
    in_flight: Option<T>,
    pending: VecDeque<T>,
}

impl<T> Default for RollQueue<T> {
    fn default() -> Self {
        RollQueue {
            in_flight: None,
            pending: VecDeque::new(),
        }
    }
}

impl<T: Clone> RollQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a request.
    ///
    /// Returns the request when it may start immediately; otherwise it is
    /// queued behind the in-flight one and `None` is returned.
    pub fn submit(&mut self, request: T) -> Option<T> {
        if self.in_flight.is_some() {
            self.pending.push_back(request);
            return None;
        }
        self.in_flight = Some(request.clone());
        Some(request)
    }

    /// Mark the in-flight request finished and start the next one, if any
    pub fn complete(&mut self) -> Option<T> {
        self.in_flight = self.pending.pop_front();
        self.in_flight.clone()
    }

    /// Drop every queued request, leaving the in-flight one untouched
    pub fn clear_pending(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<&T> {
        self.in_flight.as_ref()
    }

    /// Number of requests waiting behind the in-flight one
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
