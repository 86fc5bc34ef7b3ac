// Site directory: seeded list of classified-ad sites, session additions,
// bulk JSON import/export. Replace-on-import, no delete.

pub mod handlers;
pub mod models;
