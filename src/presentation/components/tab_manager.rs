#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Tab {
    Stations,
    Settings,
    Log,
}

pub struct TabManager {
    current_tab: Tab,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            current_tab: Tab::Stations,
        }
    }

    /// Switches tabs. Returns true when the stations screen becomes visible
    /// again, which the caller treats as a re-activation.
    pub fn switch_to(&mut self, tab: Tab) -> bool {
        let reactivated = tab == Tab::Stations && self.current_tab != Tab::Stations;
        self.current_tab = tab;
        reactivated
    }

    pub fn current(&self) -> Tab {
        self.current_tab
    }

    pub fn is_current(&self, tab: Tab) -> bool {
        self.current_tab == tab
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}
