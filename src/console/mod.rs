//! Console output.
//!
//! The report is written through the [`Printer`](printer::Printer) trait so it
//! can go to the standard output ([`Console`](stdout::Console)) or be
//! captured in memory ([`Logger`](logger::Logger)).
pub mod logger;
pub mod printer;
pub mod stdout;
