//! The driver's debug channel: one string per decision point, in the exact
//! order the main loop makes its decisions. A recorded trace is the
//! step-by-step log a regression hunt diffs against a golden one.

/// Receives one formatted line per driver decision point (`POP`,
/// `PUT BACK`, `RESUME`, `LOOKAHEAD`, `SHIFT`, `REDUCE`, `ACCEPT`, `ERROR`,
/// `RECOVER`, `LEX AGAIN`, `FAIL TO RECOVER`).
pub trait Tracer {
    fn trace(&mut self, message: &str);
}

/// Discards every trace line. The default tracer; costs nothing once
/// inlined away.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace(&mut self, _message: &str) {}
}

/// Collects every trace line in order, for printing or snapshotting.
#[derive(Default)]
pub struct PrintTracer {
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }
}

impl Tracer for PrintTracer {
    fn trace(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
