// src/progress.rs
/// Lightweight progress reporting for a report run (fetch/parse).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _ok: bool) {}
}

/// Status lines on stderr, so they never mix with the report on stdout.
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn finish(&mut self, ok: bool) {
        eprintln!("{}", if ok { "Success!" } else { "Failed." });
    }
}
