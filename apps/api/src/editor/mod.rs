// Editing session: form field paths, list and skill mutations, schema
// migration of stored state, and the sample resume.

pub mod fields;
pub mod handlers;
pub mod migration;
pub mod sample;
pub mod session;
