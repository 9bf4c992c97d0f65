use super::{Station, StationId};
use std::fmt;

/// Per-station actions offered in the station grid's context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationCommand {
    Activate,
    Deactivate,
    Edit,
    Delete,
}

impl StationCommand {
    /// Entries for a station's context menu; the toggle entry depends on
    /// the station's current flag.
    pub fn for_station(station: &Station) -> [StationCommand; 3] {
        let toggle = if station.active {
            StationCommand::Deactivate
        } else {
            StationCommand::Activate
        };
        [toggle, StationCommand::Edit, StationCommand::Delete]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StationCommand::Activate => "Activate",
            StationCommand::Deactivate => "Deactivate",
            StationCommand::Edit => "Edit",
            StationCommand::Delete => "Delete",
        }
    }
}

impl fmt::Display for StationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Updated,
    Deleted(StationId),
    Edit(Station),
}
