//! CLI command implementations.

pub(crate) mod dump;
pub(crate) mod info;
pub(crate) mod list;
