//! Interactive console front end for the bidding assistant.

pub mod config;
pub mod logging;
pub mod render;
pub mod shell;

pub use config::Config;
pub use render::Renderer;
pub use shell::{Session, Shell};
