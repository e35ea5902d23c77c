pub mod analyze;
pub mod config;
pub mod render;

pub use analyze::*;
pub use config::*;
pub use render::*;
