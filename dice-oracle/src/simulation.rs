pub mod history;
pub mod logging;
pub mod render;
pub mod session;
pub mod state;
pub mod transition;
