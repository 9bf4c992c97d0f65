pub mod location_monitor;
pub mod replay_source;

pub use location_monitor::{LocationMonitorService, MonitorSettings};
pub use replay_source::ReplayLocationSource;
