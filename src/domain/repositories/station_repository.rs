use crate::domain::entities::{Station, StationId};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait StationRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Station>>;
    async fn list_active(&self) -> Result<Vec<Station>>;
    async fn count_active(&self) -> Result<usize>;
    async fn get(&self, id: StationId) -> Result<Station>;
    /// Inserts stations without an id, replaces the rest. Returns the stored station.
    async fn save(&self, station: Station) -> Result<Station>;
    async fn delete(&self, id: StationId) -> Result<()>;
}
