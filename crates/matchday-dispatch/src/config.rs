// Dispatcher configuration

use anyhow::Result;

/// Dispatcher configuration, loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct DispatcherConfig {
    queue_capacity: Option<usize>,
}

impl DispatcherConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let queue_capacity = match std::env::var("DISPATCH_QUEUE_CAPACITY") {
            Ok(raw) => Some(raw.parse()?),
            Err(_) => None,
        };

        Ok(Self { queue_capacity })
    }

    /// Get queue capacity with default
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity.unwrap_or(64)
    }
}
