//! Socket level probing.

pub mod tcp;
