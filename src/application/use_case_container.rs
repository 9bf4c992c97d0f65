use crate::application::use_cases::*;
use crate::domain::repositories::StationRepository;
use std::sync::Arc;

pub struct UseCaseContainer {
    pub list_stations: Arc<ListStations>,
    pub count_active: Arc<CountActiveStations>,
    pub get_station: Arc<GetStation>,
    pub save_station: Arc<SaveStation>,
    pub set_station_active: Arc<SetStationActive>,
    pub delete_station: Arc<DeleteStation>,
}

impl UseCaseContainer {
    pub fn new(station_repository: Arc<dyn StationRepository>) -> Self {
        Self {
            list_stations: Arc::new(ListStations::new(Arc::clone(&station_repository))),
            count_active: Arc::new(CountActiveStations::new(Arc::clone(&station_repository))),
            get_station: Arc::new(GetStation::new(Arc::clone(&station_repository))),
            save_station: Arc::new(SaveStation::new(Arc::clone(&station_repository))),
            set_station_active: Arc::new(SetStationActive::new(Arc::clone(&station_repository))),
            delete_station: Arc::new(DeleteStation::new(Arc::clone(&station_repository))),
        }
    }
}
