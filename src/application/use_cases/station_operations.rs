use crate::domain::{
    entities::{Station, StationId},
    repositories::StationRepository,
    services::StationValidator,
};
use anyhow::Result;
use std::sync::Arc;

pub struct StationRepositoryUseCase {
    repository: Arc<dyn StationRepository>,
}

impl StationRepositoryUseCase {
    pub fn new(repository: Arc<dyn StationRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> Arc<dyn StationRepository> {
        Arc::clone(&self.repository)
    }
}

pub struct ListStations {
    use_case: StationRepositoryUseCase,
}

impl ListStations {
    pub fn new(repository: Arc<dyn StationRepository>) -> Self {
        Self {
            use_case: StationRepositoryUseCase::new(repository),
        }
    }

    pub async fn execute(&self) -> Result<Vec<Station>> {
        self.use_case.repository().list_all().await
    }
}

pub struct CountActiveStations {
    use_case: StationRepositoryUseCase,
}

impl CountActiveStations {
    pub fn new(repository: Arc<dyn StationRepository>) -> Self {
        Self {
            use_case: StationRepositoryUseCase::new(repository),
        }
    }

    pub async fn execute(&self) -> Result<usize> {
        self.use_case.repository().count_active().await
    }
}

pub struct GetStation {
    use_case: StationRepositoryUseCase,
}

impl GetStation {
    pub fn new(repository: Arc<dyn StationRepository>) -> Self {
        Self {
            use_case: StationRepositoryUseCase::new(repository),
        }
    }

    pub async fn execute(&self, id: StationId) -> Result<Station> {
        self.use_case.repository().get(id).await
    }
}

pub struct SaveStation {
    use_case: StationRepositoryUseCase,
}

impl SaveStation {
    pub fn new(repository: Arc<dyn StationRepository>) -> Self {
        Self {
            use_case: StationRepositoryUseCase::new(repository),
        }
    }

    pub async fn execute(&self, mut station: Station) -> Result<Station> {
        station.name = station.name.trim().to_string();
        StationValidator::validate_station(&station)?;

        let saved = self.use_case.repository().save(station).await?;
        tracing::info!("Saved station {} ({:?})", saved.name, saved.id);
        Ok(saved)
    }
}

pub struct SetStationActive {
    use_case: StationRepositoryUseCase,
}

impl SetStationActive {
    pub fn new(repository: Arc<dyn StationRepository>) -> Self {
        Self {
            use_case: StationRepositoryUseCase::new(repository),
        }
    }

    pub async fn execute(&self, id: StationId, active: bool) -> Result<Station> {
        let repository = self.use_case.repository();
        let station = repository.get(id).await?.with_active(active);
        let saved = repository.save(station).await?;
        tracing::info!(
            "Station {} {}",
            saved.name,
            if active { "activated" } else { "deactivated" }
        );
        Ok(saved)
    }
}

pub struct DeleteStation {
    use_case: StationRepositoryUseCase,
}

impl DeleteStation {
    pub fn new(repository: Arc<dyn StationRepository>) -> Self {
        Self {
            use_case: StationRepositoryUseCase::new(repository),
        }
    }

    pub async fn execute(&self, id: StationId) -> Result<()> {
        self.use_case.repository().delete(id).await?;
        tracing::info!("Deleted station {}", id);
        Ok(())
    }
}
