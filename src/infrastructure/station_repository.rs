use crate::domain::{
    entities::{Station, StationId},
    error::StationError,
    repositories::StationRepository,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Station store backed by a JSON file. The whole list is kept in memory and
/// the file is rewritten after every mutation.
pub struct JsonStationRepository {
    path: PathBuf,
    stations: Mutex<Vec<Station>>,
}

impl JsonStationRepository {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let stations = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read stations file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse stations file {}", path.display()))?
        } else {
            Vec::new()
        };

        tracing::debug!("Loaded {} station(s) from {}", stations.len(), path.display());

        Ok(Self {
            path,
            stations: Mutex::new(stations),
        })
    }

    async fn persist(&self, stations: &[Station]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create stations directory")?;
        }

        let content =
            serde_json::to_string_pretty(stations).context("Failed to serialize stations")?;
        tokio::fs::write(&self.path, content)
            .await
            .context("Failed to write stations file")?;

        Ok(())
    }

    fn sorted(mut stations: Vec<Station>) -> Vec<Station> {
        stations.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        stations
    }

    fn next_id(stations: &[Station]) -> StationId {
        let max = stations.iter().filter_map(|s| s.id).map(|id| id.0).max();
        StationId(max.map_or(1, |m| m + 1))
    }
}

#[async_trait]
impl StationRepository for JsonStationRepository {
    async fn list_all(&self) -> Result<Vec<Station>> {
        let stations = self.stations.lock().await;
        Ok(Self::sorted(stations.clone()))
    }

    async fn list_active(&self) -> Result<Vec<Station>> {
        let stations = self.stations.lock().await;
        Ok(Self::sorted(
            stations.iter().filter(|s| s.active).cloned().collect(),
        ))
    }

    async fn count_active(&self) -> Result<usize> {
        let stations = self.stations.lock().await;
        Ok(stations.iter().filter(|s| s.active).count())
    }

    async fn get(&self, id: StationId) -> Result<Station> {
        let stations = self.stations.lock().await;
        stations
            .iter()
            .find(|s| s.id == Some(id))
            .cloned()
            .ok_or_else(|| StationError::NotFound(id).into())
    }

    async fn save(&self, mut station: Station) -> Result<Station> {
        let mut stations = self.stations.lock().await;
        let mut updated = stations.clone();

        match station.id {
            Some(id) => {
                let existing = updated
                    .iter_mut()
                    .find(|s| s.id == Some(id))
                    .ok_or(StationError::NotFound(id))?;
                *existing = station.clone();
            }
            None => {
                station.id = Some(Self::next_id(&updated));
                updated.push(station.clone());
            }
        }

        // memory only follows a successful write
        self.persist(&updated).await?;
        *stations = updated;
        Ok(station)
    }

    async fn delete(&self, id: StationId) -> Result<()> {
        let mut stations = self.stations.lock().await;

        let updated: Vec<Station> = stations
            .iter()
            .filter(|s| s.id != Some(id))
            .cloned()
            .collect();
        if updated.len() == stations.len() {
            return Err(StationError::NotFound(id).into());
        }

        self.persist(&updated).await?;
        *stations = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GeoPoint;

    fn station(name: &str) -> Station {
        Station::new(name.to_string(), GeoPoint::new(48.0, 11.0), 500.0)
    }

    fn repository(dir: &tempfile::TempDir) -> JsonStationRepository {
        JsonStationRepository::open(dir.path().join("stations.json")).unwrap()
    }

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);

        let a = repo.save(station("Pasing")).await.unwrap();
        let b = repo.save(station("Laim")).await.unwrap();

        assert_eq!(a.id, Some(StationId(1)));
        assert_eq!(b.id, Some(StationId(2)));
    }

    #[tokio::test]
    async fn list_is_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);
        repo.save(station("pasing")).await.unwrap();
        repo.save(station("Hackerbrücke")).await.unwrap();
        repo.save(station("Laim")).await.unwrap();

        let names: Vec<_> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Hackerbrücke", "Laim", "pasing"]);
    }

    #[tokio::test]
    async fn stations_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = repository(&dir);
            repo.save(station("Pasing")).await.unwrap();
            repo.save(station("Laim").with_active(false)).await.unwrap();
        }

        let repo = repository(&dir);
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
        assert_eq!(repo.count_active().await.unwrap(), 1);
        assert_eq!(repo.list_active().await.unwrap()[0].name, "Pasing");
    }

    #[tokio::test]
    async fn save_replaces_existing_station() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);
        let saved = repo.save(station("Pasing")).await.unwrap();

        repo.save(saved.clone().with_active(false)).await.unwrap();

        let loaded = repo.get(saved.id.unwrap()).await.unwrap();
        assert!(!loaded.active);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_station_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);

        let err = repo.delete(StationId(42)).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<StationError>(),
            Some(&StationError::NotFound(StationId(42)))
        );
    }

    #[tokio::test]
    async fn delete_removes_station() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);
        let saved = repo.save(station("Pasing")).await.unwrap();

        repo.delete(saved.id.unwrap()).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
        assert!(repo.get(saved.id.unwrap()).await.is_err());
    }

    /// Repository whose file sits below a regular file, so every write fails.
    async fn unwritable_repository(dir: &tempfile::TempDir) -> JsonStationRepository {
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        JsonStationRepository::open(blocker.join("stations.json")).unwrap()
    }

    #[tokio::test]
    async fn failed_save_leaves_no_station_behind() {
        let dir = tempfile::tempdir().unwrap();
        let repo = unwritable_repository(&dir).await;

        assert!(repo.save(station("Pasing")).await.is_err());

        assert!(repo.list_all().await.unwrap().is_empty());
        assert_eq!(repo.count_active().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn failed_delete_keeps_station() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stations.json");
        let repo = JsonStationRepository::open(&path).unwrap();
        let saved = repo.save(station("Pasing")).await.unwrap();

        // swap the file for a directory so the rewrite fails
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(repo.delete(saved.id.unwrap()).await.is_err());
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}
