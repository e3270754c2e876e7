// Export boundary: plain-text serialization and the advisory readiness check.
// Copying to the clipboard or printing is left to the client.

pub mod handlers;
pub mod readiness;
pub mod text;
