//! Lazily compiled regular expressions

mod cache;

pub(crate) use cache::*;
