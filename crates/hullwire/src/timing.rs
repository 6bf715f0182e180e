//! Wall-clock instrumentation around marshaling steps.

use std::time::Instant;

/// Run `f`, emit its elapsed wall-clock milliseconds under `name`, and
/// return its result unchanged.
///
/// Events carry the `perf` target so a subscriber can filter them from the
/// rest of the log stream.
pub fn timed<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(target: "perf", op = name, elapsed_ms, "timed");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_inner_result() {
        let out = timed("add", || 2 + 2);
        assert_eq!(out, 4);
    }

    #[test]
    fn propagates_results_and_errors() {
        let ok: Result<u8, &str> = timed("ok", || Ok(7));
        assert_eq!(ok, Ok(7));
        let err: Result<u8, &str> = timed("err", || Err("nope"));
        assert_eq!(err, Err("nope"));
    }
}
