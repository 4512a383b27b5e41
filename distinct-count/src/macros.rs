#[cfg(feature = "tracing")]
macro_rules! dc_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "distinct_count", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dc_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! dc_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "distinct_count", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dc_debug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! dc_warn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "distinct_count", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dc_warn {
    ($($tt:tt)*) => {};
}
