/// Emits a `trace`-level event when the `tracing` feature is enabled, expands to nothing otherwise.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

/// Same as `trace_event!`, but at the `debug` level.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

#[inline]
#[cfg_attr(debug_assertions, track_caller)]
pub unsafe fn unreachable_debugchecked(msg: &str) -> ! {
    #[cfg(debug_assertions)]
    {
        // Only reachable on a corrupted arena, nothing sensible can be done from here
        unreachable!("{}", msg)
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = msg;
        core::hint::unreachable_unchecked()
    }
}
