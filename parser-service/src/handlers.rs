// Module declarations for HTTP handlers
pub mod health;
pub mod parse;

// Re-exports
pub use health::health_handler;
pub use parse::parse_resume_handler;
