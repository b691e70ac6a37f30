//! Small shared utilities.

pub mod debounce;
