pub mod app_config;
pub mod jsonl;

pub use app_config::Config;
pub use jsonl::JsonlFile;
