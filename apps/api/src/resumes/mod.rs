//! Resume endpoints: summary, on-screen preview, print snapshot and export.

pub mod handlers;
pub mod session;
