/// Background process that watches the position and raises station alarms.
///
/// Commands are idempotent: starting a running monitor or stopping a stopped
/// one does nothing. `is_running` must be cheap enough to poll every frame.
pub trait MonitoringService: Send + Sync {
    fn is_running(&self) -> bool;
    fn start(&self);
    fn stop(&self);
}
