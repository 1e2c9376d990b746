//! Timing
//!
//! Wraps the monotonic `std::time::Instant` clock. A single search on a small
//! sequence finishes in nanoseconds, so readings are kept as integer nanoseconds
//! and never rounded to coarser units before aggregation.

use std::time::Instant;

/// Timer for one search invocation
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return elapsed nanoseconds
    #[inline(always)]
    pub fn stop(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Pin the current thread to a specific core
///
/// Keeps the timed loop on one core so migrations do not show up as noise.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), std::io::Error> {
    use std::mem::MaybeUninit;

    if cpu >= libc::CPU_SETSIZE as usize {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("cpu index {} out of range", cpu),
        ));
    }

    // SAFETY: `cpu_set_t` is plain data; zeroed is a valid empty set, and
    // sched_setaffinity only reads the set we pass for the calling thread.
    unsafe {
        let mut set = MaybeUninit::<libc::cpu_set_t>::zeroed();
        let set_ref = set.assume_init_mut();

        libc::CPU_ZERO(set_ref);
        libc::CPU_SET(cpu, set_ref);

        let result = libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set_ref);

        if result == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }
}

/// Pin the current thread to a specific core (unsupported here, always succeeds)
#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), std::io::Error> {
    Ok(())
}
