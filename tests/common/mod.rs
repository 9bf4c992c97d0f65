// Shared test helpers

use station_alarm::application::{MainController, UseCaseContainer};
use station_alarm::domain::entities::{GeoPoint, Station};
use station_alarm::domain::repositories::{MonitoringService, StationRepository};
use station_alarm::infrastructure::JsonStationRepository;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
pub struct FakeMonitor {
    pub running: AtomicBool,
    pub starts: AtomicUsize,
    pub stops: AtomicUsize,
}

impl FakeMonitor {
    pub fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::SeqCst);
    }

    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }
}

impl MonitoringService for FakeMonitor {
    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn start(&self) {
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.running.store(true, Ordering::SeqCst);
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
        self.running.store(false, Ordering::SeqCst);
    }
}

pub struct Harness {
    pub controller: MainController,
    pub monitor: Arc<FakeMonitor>,
    pub repository: Arc<JsonStationRepository>,
    _dir: tempfile::TempDir,
}

pub fn station(name: &str, active: bool) -> Station {
    Station::new(name.to_string(), GeoPoint::new(48.14, 11.56), 800.0).with_active(active)
}

pub async fn harness(stations: Vec<Station>) -> Harness {
    let dir = tempfile::tempdir().expect("tempdir");
    let repository =
        Arc::new(JsonStationRepository::open(dir.path().join("stations.json")).expect("open"));
    for station in stations {
        repository.save(station).await.expect("seed station");
    }

    let monitor = Arc::new(FakeMonitor::default());
    let use_cases = Arc::new(UseCaseContainer::new(repository.clone()));
    let mut controller = MainController::new(use_cases, monitor.clone());
    controller.initialize().await.expect("initialize");

    Harness {
        controller,
        monitor,
        repository,
        _dir: dir,
    }
}
