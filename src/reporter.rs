use std::cell::RefCell;

/// Receives the rendered message of every failed check.
///
/// Whether a failure ends the current test is up to the implementation.
pub trait Reporter {
    fn fail(&self, message: String);
}

/// Fails the current test by panicking with the message.
#[derive(Debug, Default, Clone, Copy)]
pub struct Panic;

impl Reporter for Panic {
    #[track_caller]
    fn fail(&self, message: String) {
        panic!("{}", message);
    }
}

/// Collects failure messages without interrupting the caller.
#[derive(Debug, Default)]
pub struct Recorder {
    failures: RefCell<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.failures.borrow().len()
    }
}

impl Reporter for Recorder {
    fn fail(&self, message: String) {
        self.failures.borrow_mut().push(message);
    }
}

impl<F: Fn(String)> Reporter for F {
    fn fail(&self, message: String) {
        self(message)
    }
}
