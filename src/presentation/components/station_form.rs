use crate::domain::entities::{GeoPoint, Station, StationId};

/// Add/edit window for a single station.
pub struct StationForm {
    open: bool,
    editing: Option<StationId>,
    name: String,
    latitude: String,
    longitude: String,
    radius: String,
    active: bool,
    error: Option<String>,
}

impl StationForm {
    pub fn new() -> Self {
        Self {
            open: false,
            editing: None,
            name: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            radius: String::new(),
            active: true,
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open_new(&mut self, default_radius_m: f64) {
        *self = Self::new();
        self.radius = format!("{default_radius_m}");
        self.open = true;
    }

    pub fn open_edit(&mut self, station: &Station) {
        self.editing = station.id;
        self.name = station.name.clone();
        self.latitude = station.location.latitude.to_string();
        self.longitude = station.location.longitude.to_string();
        self.radius = station.radius_m.to_string();
        self.active = station.active;
        self.error = None;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.error = None;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    fn parse_number(field: &str, value: &str) -> Result<f64, String> {
        value
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| format!("{} must be a number", field))
    }

    /// Builds the station from the form fields. Range checks are left to
    /// the save use case.
    pub fn to_station(&self) -> Result<Station, String> {
        let latitude = Self::parse_number("Latitude", &self.latitude)?;
        let longitude = Self::parse_number("Longitude", &self.longitude)?;
        let radius = Self::parse_number("Radius", &self.radius)?;

        let mut station = Station::new(self.name.clone(), GeoPoint::new(latitude, longitude), radius)
            .with_active(self.active);
        station.id = self.editing;
        Ok(station)
    }

    /// Returns the station to save when the user presses Save.
    pub fn render(&mut self, ctx: &egui::Context) -> Option<Station> {
        if !self.open {
            return None;
        }

        let mut submitted = None;
        let mut open = self.open;
        let title = if self.editing.is_some() {
            "Edit station"
        } else {
            "Add station"
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("station_form_grid")
                    .num_columns(2)
                    .spacing([10.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Name:");
                        ui.text_edit_singleline(&mut self.name);
                        ui.end_row();

                        ui.label("Latitude:");
                        ui.text_edit_singleline(&mut self.latitude);
                        ui.end_row();

                        ui.label("Longitude:");
                        ui.text_edit_singleline(&mut self.longitude);
                        ui.end_row();

                        ui.label("Radius (m):");
                        ui.text_edit_singleline(&mut self.radius);
                        ui.end_row();

                        ui.label("");
                        ui.checkbox(&mut self.active, "Active");
                        ui.end_row();
                    });

                if let Some(error) = &self.error {
                    ui.colored_label(egui::Color32::from_rgb(255, 80, 80), error);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        match self.to_station() {
                            Ok(station) => submitted = Some(station),
                            Err(e) => self.error = Some(e),
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        self.close();
                    }
                });
            });

        if !open {
            self.close();
        }

        submitted
    }
}

impl Default for StationForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_uses_default_radius() {
        let mut form = StationForm::new();
        form.open_new(750.0);
        form.name = "Pasing".to_string();
        form.latitude = "48.1497".to_string();
        form.longitude = "11,4614".to_string();

        let station = form.to_station().unwrap();
        assert_eq!(station.id, None);
        assert_eq!(station.radius_m, 750.0);
        assert_eq!(station.location.longitude, 11.4614);
        assert!(station.active);
    }

    #[test]
    fn edit_keeps_the_station_id() {
        let original = Station::new("Laim".to_string(), GeoPoint::new(48.14, 11.50), 300.0)
            .with_id(StationId(7))
            .with_active(false);
        let mut form = StationForm::new();
        form.open_edit(&original);

        assert!(form.is_open());
        assert_eq!(form.to_station().unwrap(), original);
    }

    #[test]
    fn non_numeric_field_is_reported() {
        let mut form = StationForm::new();
        form.open_new(500.0);
        form.latitude = "north".to_string();
        form.longitude = "11".to_string();

        assert_eq!(form.to_station().unwrap_err(), "Latitude must be a number");
    }
}
