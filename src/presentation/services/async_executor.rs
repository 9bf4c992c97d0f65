use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::{Handle, Runtime};

/// Runtime shared by the UI thread (blocking on short repository calls) and
/// the background monitor task.
pub struct AsyncExecutor {
    runtime: Arc<Runtime>,
}

impl AsyncExecutor {
    pub fn new() -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self {
            runtime: Arc::new(runtime),
        })
    }

    pub fn execute<F, T>(&self, future: F) -> T
    where
        F: Future<Output = T>,
    {
        self.runtime.block_on(future)
    }

    pub fn handle(&self) -> Handle {
        self.runtime.handle().clone()
    }
}

impl Clone for AsyncExecutor {
    fn clone(&self) -> Self {
        Self {
            runtime: Arc::clone(&self.runtime),
        }
    }
}
