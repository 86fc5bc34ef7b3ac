// Posting log and campaign tracker. Both collections are append-only:
// no update, no delete.

pub mod handlers;
pub mod models;
