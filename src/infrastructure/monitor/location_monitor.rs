use crate::domain::{
    entities::{AppConfig, StationAlarm, StationId},
    repositories::{LocationSource, MonitoringService, StationRepository},
    services::proximity,
};
use anyhow::Result;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub poll_interval: Duration,
    pub max_fix_accuracy_m: f64,
    pub stop_when_all_alarmed: bool,
}

impl From<&AppConfig> for MonitorSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_fix_accuracy_m: config.max_fix_accuracy_m,
            stop_when_all_alarmed: config.stop_when_all_alarmed,
        }
    }
}

enum TickOutcome {
    Continue,
    Finished,
}

/// Samples the location source on a background task and raises an alarm the
/// first time the position enters an active station's radius.
pub struct LocationMonitorService {
    runtime: Handle,
    stations: Arc<dyn StationRepository>,
    source: Arc<dyn LocationSource>,
    alarms: Sender<StationAlarm>,
    settings: MonitorSettings,
    running: Arc<AtomicBool>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl LocationMonitorService {
    pub fn new(
        runtime: Handle,
        stations: Arc<dyn StationRepository>,
        source: Arc<dyn LocationSource>,
        alarms: Sender<StationAlarm>,
        settings: MonitorSettings,
    ) -> Self {
        Self {
            runtime,
            stations,
            source,
            alarms,
            settings,
            running: Arc::new(AtomicBool::new(false)),
            task: Mutex::new(None),
        }
    }
}

impl MonitoringService for LocationMonitorService {
    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn start(&self) {
        let mut task = match self.task.lock() {
            Ok(task) => task,
            Err(poisoned) => poisoned.into_inner(),
        };

        if self.running.swap(true, Ordering::SeqCst) {
            tracing::debug!("Location monitor already running");
            return;
        }

        tracing::info!(
            "Starting location monitor (interval {:?})",
            self.settings.poll_interval
        );

        let session = MonitorSession {
            stations: Arc::clone(&self.stations),
            source: Arc::clone(&self.source),
            alarms: self.alarms.clone(),
            settings: self.settings.clone(),
            running: Arc::clone(&self.running),
            alarmed: HashSet::new(),
        };
        *task = Some(self.runtime.spawn(session.run()));
    }

    fn stop(&self) {
        let mut task = match self.task.lock() {
            Ok(task) => task,
            Err(poisoned) => poisoned.into_inner(),
        };

        if self.running.swap(false, Ordering::SeqCst) {
            tracing::info!("Stopping location monitor");
        }
        if let Some(handle) = task.take() {
            handle.abort();
        }
    }
}

impl Drop for LocationMonitorService {
    fn drop(&mut self) {
        self.stop();
    }
}

struct MonitorSession {
    stations: Arc<dyn StationRepository>,
    source: Arc<dyn LocationSource>,
    alarms: Sender<StationAlarm>,
    settings: MonitorSettings,
    running: Arc<AtomicBool>,
    alarmed: HashSet<StationId>,
}

impl MonitorSession {
    async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.settings.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while self.running.load(Ordering::SeqCst) {
            ticker.tick().await;

            match self.tick().await {
                Ok(TickOutcome::Continue) => {}
                Ok(TickOutcome::Finished) if self.settings.stop_when_all_alarmed => {
                    tracing::info!("All active stations reached, location monitor finished");
                    break;
                }
                Ok(TickOutcome::Finished) => {}
                Err(e) => tracing::error!("Location monitor tick failed: {:#}", e),
            }
        }

        self.running.store(false, Ordering::SeqCst);
    }

    async fn tick(&mut self) -> Result<TickOutcome> {
        let Some(fix) = self.source.current_fix().await? else {
            tracing::debug!("No location fix available yet");
            return Ok(TickOutcome::Continue);
        };

        if !fix.point.is_finite() {
            tracing::warn!(
                "Skipping fix with invalid coordinates ({}, {})",
                fix.point.latitude,
                fix.point.longitude
            );
            return Ok(TickOutcome::Continue);
        }

        if !proximity::is_precise_enough(&fix, self.settings.max_fix_accuracy_m) {
            tracing::warn!(
                "Skipping imprecise fix ({:.0} m > {:.0} m)",
                fix.accuracy_m,
                self.settings.max_fix_accuracy_m
            );
            return Ok(TickOutcome::Continue);
        }

        let active = self.stations.list_active().await?;
        tracing::debug!(
            "Fix at {:.5}, {:.5} checked against {} active station(s)",
            fix.point.latitude,
            fix.point.longitude,
            active.len()
        );

        for (station, distance_m) in proximity::stations_in_range(&fix, &active) {
            let Some(id) = station.id else {
                continue;
            };
            if !self.alarmed.insert(id) {
                continue;
            }

            tracing::info!("Approaching {} ({:.0} m)", station.name, distance_m);
            let alarm = StationAlarm {
                station_id: id,
                station_name: station.name.clone(),
                distance_m,
                triggered_at: Utc::now(),
            };
            if self.alarms.send(alarm).is_err() {
                tracing::warn!("Alarm receiver dropped, alarm for {} not delivered", station.name);
            }
        }

        let pending = active
            .iter()
            .filter_map(|s| s.id)
            .any(|id| !self.alarmed.contains(&id));

        Ok(if pending {
            TickOutcome::Continue
        } else {
            TickOutcome::Finished
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{GeoFix, GeoPoint, Station};
    use crate::infrastructure::JsonStationRepository;
    use crate::infrastructure::monitor::ReplayLocationSource;
    use std::sync::mpsc::{Receiver, channel};

    fn settings(stop_when_all_alarmed: bool) -> MonitorSettings {
        MonitorSettings {
            poll_interval: Duration::from_millis(10),
            max_fix_accuracy_m: 100.0,
            stop_when_all_alarmed,
        }
    }

    async fn repository(dir: &tempfile::TempDir, stations: Vec<Station>) -> Arc<JsonStationRepository> {
        let repo = Arc::new(JsonStationRepository::open(dir.path().join("stations.json")).unwrap());
        for station in stations {
            repo.save(station).await.unwrap();
        }
        repo
    }

    async fn wait_for<F: Fn() -> bool>(condition: F) -> bool {
        for _ in 0..200 {
            if condition() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }

    async fn next_alarm(rx: &Receiver<StationAlarm>) -> Option<StationAlarm> {
        for _ in 0..200 {
            if let Ok(alarm) = rx.try_recv() {
                return Some(alarm);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        None
    }

    fn fix(lat: f64, lon: f64, accuracy_m: f64) -> GeoFix {
        GeoFix::new(GeoPoint::new(lat, lon), accuracy_m)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn alarms_once_and_stops_when_all_reached() {
        let dir = tempfile::tempdir().unwrap();
        let stations = repository(
            &dir,
            vec![Station::new("Pasing".to_string(), GeoPoint::new(48.1497, 11.4614), 500.0)],
        )
        .await;
        let source = Arc::new(ReplayLocationSource::from_fixes(vec![
            fix(48.2000, 11.4614, 10.0),
            fix(48.1500, 11.4614, 10.0),
        ]));
        let (tx, rx) = channel();

        let monitor = LocationMonitorService::new(
            Handle::current(),
            stations,
            source,
            tx,
            settings(true),
        );
        monitor.start();
        assert!(monitor.is_running());

        let alarm = next_alarm(&rx).await.expect("alarm raised");
        assert_eq!(alarm.station_name, "Pasing");
        assert!(alarm.distance_m < 500.0);

        assert!(wait_for(|| !monitor.is_running()).await);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn imprecise_fixes_do_not_alarm() {
        let dir = tempfile::tempdir().unwrap();
        let stations = repository(
            &dir,
            vec![Station::new("Laim".to_string(), GeoPoint::new(48.1446, 11.5036), 500.0)],
        )
        .await;
        let source = Arc::new(ReplayLocationSource::from_fixes(vec![fix(
            48.1446, 11.5036, 1_000.0,
        )]));
        let (tx, rx) = channel();

        let monitor =
            LocationMonitorService::new(Handle::current(), stations, source, tx, settings(true));
        monitor.start();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
        assert!(monitor.is_running());

        monitor.stop();
        assert!(!monitor.is_running());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn start_and_stop_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let stations = repository(&dir, Vec::new()).await;
        let source = Arc::new(ReplayLocationSource::from_fixes(Vec::new()));
        let (tx, _rx) = channel();

        let monitor =
            LocationMonitorService::new(Handle::current(), stations, source, tx, settings(false));

        monitor.stop();
        assert!(!monitor.is_running());

        monitor.start();
        monitor.start();
        assert!(monitor.is_running());

        monitor.stop();
        monitor.stop();
        assert!(!monitor.is_running());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn keeps_running_when_stop_when_all_alarmed_is_off() {
        let dir = tempfile::tempdir().unwrap();
        let stations = repository(
            &dir,
            vec![Station::new("Pasing".to_string(), GeoPoint::new(48.1497, 11.4614), 500.0)],
        )
        .await;
        let source = Arc::new(ReplayLocationSource::from_fixes(vec![fix(
            48.1497, 11.4614, 10.0,
        )]));
        let (tx, rx) = channel();

        let monitor =
            LocationMonitorService::new(Handle::current(), stations, source, tx, settings(false));
        monitor.start();

        assert!(next_alarm(&rx).await.is_some());

        // several more ticks at the same spot
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(monitor.is_running());
        assert!(rx.try_recv().is_err());

        monitor.stop();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn restart_clears_alarmed_set() {
        let dir = tempfile::tempdir().unwrap();
        let stations = repository(
            &dir,
            vec![Station::new("Laim".to_string(), GeoPoint::new(48.1446, 11.5036), 500.0)],
        )
        .await;
        let source = Arc::new(ReplayLocationSource::from_fixes(vec![fix(
            48.1446, 11.5036, 10.0,
        )]));
        let (tx, rx) = channel();

        let monitor =
            LocationMonitorService::new(Handle::current(), stations, source, tx, settings(false));

        monitor.start();
        let first = next_alarm(&rx).await.expect("first session alarm");
        monitor.stop();
        while rx.try_recv().is_ok() {}

        monitor.start();
        let second = next_alarm(&rx).await.expect("second session alarm");
        assert_eq!(first.station_id, second.station_id);

        monitor.stop();
    }
}
