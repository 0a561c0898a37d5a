use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) fn sleep_ms(duration: u64) {
    std::thread::sleep(std::time::Duration::from_millis(duration));
}

/// Capture time in nanoseconds since the unix epoch.
pub(crate) fn timestamp_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}
