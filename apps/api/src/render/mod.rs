// Resume preview rendering: one HTML fragment shared by the mini and full
// previews, styled by the chosen template and accent color.

pub mod handlers;
pub mod html;

pub use html::render_resume_html;
