//! Application bootstrapping.
//!
//! Everything the tool needs before the first target is probed: for now only
//! the diagnostic logging.
pub mod logging;
