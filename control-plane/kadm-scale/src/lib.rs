pub mod config;
pub mod tables;
pub mod validator;

pub use config::ScaleConfig;
pub use tables::{ResizeFlow, TransitionRule};
pub use validator::{validate_master_resize, validate_worker_delta};
