//! Sinks for the compiled script.
pub mod file;
pub mod stdout;
