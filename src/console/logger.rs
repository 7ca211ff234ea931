use std::cell::RefCell;

use super::printer::Printer;

/// Keeps everything printed in memory.
///
/// The standard output and the standard error are captured separately.
pub struct Logger {
    output: RefCell<String>,
    errors: RefCell<String>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: RefCell::new(String::new()),
            errors: RefCell::new(String::new()),
        }
    }

    #[must_use]
    pub fn log(&self) -> String {
        self.output.borrow().clone()
    }

    #[must_use]
    pub fn error_log(&self) -> String {
        self.errors.borrow().clone()
    }
}

impl Printer for Logger {
    fn print(&self, output: &str) {
        self.output.borrow_mut().push_str(output);
    }

    fn eprint(&self, output: &str) {
        self.errors.borrow_mut().push_str(output);
    }

    fn println(&self, output: &str) {
        self.print(&format!("{}\n", &output));
    }

    fn eprintln(&self, output: &str) {
        self.eprint(&format!("{}\n", &output));
    }
}
