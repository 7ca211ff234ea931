pub const GREEN: &str = "\x1B[32m";
pub const RED: &str = "\x1B[31m";
pub const CYAN: &str = "\x1B[36m";
pub const RESET: &str = "\x1B[0m";

pub trait Printer {
    fn print(&self, output: &str);
    fn eprint(&self, output: &str);
    fn println(&self, output: &str);
    fn eprintln(&self, output: &str);
}

/// ANSI colors for the report tokens.
///
/// A disabled palette returns the text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub fn plain() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub fn green(self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    #[must_use]
    pub fn red(self, text: &str) -> String {
        self.paint(RED, text)
    }

    #[must_use]
    pub fn cyan(self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{color}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }
}
