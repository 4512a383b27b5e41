#[cfg(feature = "tracing")]
macro_rules! io_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "distinct_count_io", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! io_debug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! io_warn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "distinct_count_io", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! io_warn {
    ($($tt:tt)*) => {};
}
