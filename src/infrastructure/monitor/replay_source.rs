use crate::domain::{entities::GeoFix, repositories::LocationSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Mutex;

/// Replays a recorded GPS track, one fix per request. Once the track is
/// exhausted the last fix is repeated.
pub struct ReplayLocationSource {
    fixes: Vec<GeoFix>,
    cursor: Mutex<usize>,
}

impl ReplayLocationSource {
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read track file {}", path.display()))?;
        let fixes: Vec<GeoFix> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse track file {}", path.display()))?;

        tracing::info!("Loaded {} fix(es) from {}", fixes.len(), path.display());
        Ok(Self::from_fixes(fixes))
    }

    /// Loads the configured track. A missing or broken track is logged and
    /// replaced by an empty one so the app still starts.
    pub fn open_or_empty(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::open(path).unwrap_or_else(|e| {
                tracing::error!("Failed to load track file, continuing without one: {:#}", e);
                Self::from_fixes(Vec::new())
            }),
            None => Self::from_fixes(Vec::new()),
        }
    }

    pub fn from_fixes(fixes: Vec<GeoFix>) -> Self {
        Self {
            fixes,
            cursor: Mutex::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }
}

#[async_trait]
impl LocationSource for ReplayLocationSource {
    async fn current_fix(&self) -> Result<Option<GeoFix>> {
        let Some(last) = self.fixes.len().checked_sub(1) else {
            return Ok(None);
        };

        let mut cursor = self
            .cursor
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock replay cursor: {}", e))?;
        let fix = self.fixes[(*cursor).min(last)].clone();
        if *cursor < last {
            *cursor += 1;
        }

        Ok(Some(fix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GeoPoint;

    #[tokio::test]
    async fn empty_track_has_no_fix() {
        let source = ReplayLocationSource::from_fixes(Vec::new());
        assert!(source.current_fix().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replays_in_order_and_holds_last() {
        let source = ReplayLocationSource::from_fixes(vec![
            GeoFix::new(GeoPoint::new(1.0, 1.0), 5.0),
            GeoFix::new(GeoPoint::new(2.0, 2.0), 5.0),
        ]);

        let lats: Vec<f64> = [
            source.current_fix().await.unwrap(),
            source.current_fix().await.unwrap(),
            source.current_fix().await.unwrap(),
        ]
        .into_iter()
        .map(|f| f.unwrap().point.latitude)
        .collect();
        assert_eq!(lats, vec![1.0, 2.0, 2.0]);
    }

    #[test]
    fn parses_track_without_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.json");
        std::fs::write(
            &path,
            r#"[{"point": {"latitude": 48.1, "longitude": 11.5}, "accuracy_m": 12.0}]"#,
        )
        .unwrap();

        let source = ReplayLocationSource::open(&path).unwrap();
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn broken_track_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.json");
        assert!(ReplayLocationSource::open_or_empty(Some(missing.as_path())).is_empty());

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "{ not json").unwrap();
        assert!(ReplayLocationSource::open_or_empty(Some(corrupt.as_path())).is_empty());

        assert!(ReplayLocationSource::open_or_empty(None).is_empty());
    }
}
