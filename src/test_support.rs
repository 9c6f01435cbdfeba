use std::sync::{Mutex, MutexGuard};

use crate::usecases::add_message::Clock;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}

/// A clock pinned to one instant, for deterministic ids and timestamps.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now_unix_ms: i64,
    display_time: String,
}

impl FixedClock {
    pub fn at(now_unix_ms: i64, display_time: &str) -> Self {
        Self {
            now_unix_ms,
            display_time: display_time.to_owned(),
        }
    }
}

impl Clock for FixedClock {
    fn now_unix_ms(&self) -> i64 {
        self.now_unix_ms
    }

    fn display_time(&self) -> String {
        self.display_time.clone()
    }
}
