//! Crate-local macros.

/// Evaluates the given expression, emitting trace-level log lines before and
/// after.
macro_rules! with_trace_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        log::trace!(concat!("Begin: ", $message)$(,$arg)*);
        let _result = $expression;
        log::trace!(concat!("Done: ", $message)$(,$arg)*);
        _result
    }};
}
