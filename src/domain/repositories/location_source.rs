use crate::domain::entities::GeoFix;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Latest known position, `None` while no fix is available.
    async fn current_fix(&self) -> Result<Option<GeoFix>>;
}
