pub mod display;
pub mod session;

pub use display::{HELP, render_display, render_json};
pub use session::{Flow, Session};
