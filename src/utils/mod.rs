//! Utility modules shared by the resolvers and generators.

pub mod date;
pub mod escape;
pub mod log;
pub mod url;
