//! Route handlers.

pub mod actions;
pub mod page;
pub mod status;
