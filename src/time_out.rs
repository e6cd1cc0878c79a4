//! Bounding a single query's wall-clock time.
//!
//! Proof depth is bounded only by the call stack (a host-level concern,
//! not trapped here), but a pathological recursive program can still
//! search forever without ever overflowing the stack. This module gives
//! the REPL driver a way to cut such a search off: a timer sets a stop
//! flag, which [`KnowledgeBase::rules`](crate::knowledge_base::KnowledgeBase::rules)
//! consults, so a timed-out search unwinds the same way a search against
//! an unknown predicate does — by running out of rules to try, not by an
//! error path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use thread_timer::ThreadTimer;

use crate::variable::clear_id;

static STOP_QUERY: AtomicBool = AtomicBool::new(false);

/// Starts a timer that sets the stop flag after `milliseconds`.
///
/// # Usage
/// ```
/// use horn::time_out::start_query_timer;
///
/// let timer = start_query_timer(300);
/// ```
pub fn start_query_timer(milliseconds: u64) -> ThreadTimer {
    STOP_QUERY.store(false, Ordering::SeqCst);
    let timer = ThreadTimer::new();
    timer.start(Duration::from_millis(milliseconds), move || { stop_query(); }).unwrap();
    timer
}

/// Cancels a query timer, ignoring any error (the timer may already have
/// fired).
pub fn cancel_timer(timer: ThreadTimer) {
    let _ = timer.cancel();
}

/// Resets the stop flag and the fresh-id counter at the start of a query,
/// keeping the substitution environment's key space small.
pub fn start_query() {
    STOP_QUERY.store(false, Ordering::SeqCst);
    clear_id();
}

/// Sets the stop flag, effectively halting any in-progress search.
pub fn stop_query() {
    STOP_QUERY.store(true, Ordering::SeqCst);
}

/// Whether the current query has timed out.
pub fn query_stopped() -> bool {
    STOP_QUERY.load(Ordering::SeqCst)
}

#[cfg(test)]
mod test {
    use super::*;
    use serial_test::serial;
    use std::thread;

    #[test]
    #[serial]
    fn test_query_timer_fires() {
        let timer = start_query_timer(30);
        assert!(!query_stopped());
        thread::sleep(Duration::from_millis(40));
        cancel_timer(timer);
        assert!(query_stopped());
    }

    #[test]
    #[serial]
    fn test_start_query_resets_flag() {
        stop_query();
        assert!(query_stopped());
        start_query();
        assert!(!query_stopped());
    }
}
