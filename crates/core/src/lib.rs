pub mod analytics;
pub mod audio;
pub mod pipeline;
pub mod recognition;
pub mod session;
pub mod shared;
