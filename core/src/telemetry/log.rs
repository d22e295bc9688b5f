use log::{error, info};
use std::cell::RefCell;
use std::io::{self, Stdout, Write};

/// Console progress reporter; every line is mirrored to the `log` facade.
pub struct ProgressLog<W: Write = Stdout> {
    sink: RefCell<W>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }
}

impl<W: Write> ProgressLog<W> {
    pub fn with_sink(sink: W) -> Self {
        Self {
            sink: RefCell::new(sink),
        }
    }

    pub fn record(&self, message: &str) {
        self.emit(message);
    }

    pub fn warn(&self, message: &str) {
        self.emit(message);
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    fn emit(&self, message: &str) {
        if let Err(err) = writeln!(self.sink.borrow_mut(), "{}", message) {
            error!("progress output failed: {}", err);
        }
        info!("{}", message);
    }
}

impl Default for ProgressLog {
    fn default() -> Self {
        Self::new()
    }
}
