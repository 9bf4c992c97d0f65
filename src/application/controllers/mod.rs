pub mod main_controller;
pub mod service_toggle;

pub use main_controller::MainController;
pub use service_toggle::ServiceToggleController;
