pub mod async_executor;
pub mod log_capture;

pub use async_executor::AsyncExecutor;
