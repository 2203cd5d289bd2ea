/// Progress events emitted by the simulation workflow.
#[derive(Debug, Clone)]
pub enum Progress {
    /// A named workflow phase begins (optimization, assembly, prediction).
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// One optimizer descent step completed.
    OptimizationStep { iteration: usize, total: usize },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback; a reporter without a
/// callback is a no-op, so library callers pay nothing for it.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
