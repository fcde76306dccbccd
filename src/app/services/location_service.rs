use crate::domain::model::Location;
use crate::domain::ports::LocationRepository;
use crate::utils::error::DashboardError;

pub struct LocationService<L: LocationRepository> {
    repository: L,
}

impl<L: LocationRepository> LocationService<L> {
    pub fn new(repository: L) -> Self {
        Self { repository }
    }

    /// 沒有任何地點時記錄錯誤並回傳 `None`
    pub fn get_locations(&self) -> Option<Vec<Location>> {
        let locations = self.repository.list_all();

        if locations.is_empty() {
            let err = DashboardError::not_available("No locations available");
            tracing::error!("Error fetching current locations: {}", err);
            return None;
        }

        Some(locations)
    }

    pub fn find_location(&self, id: &str) -> Option<Location> {
        self.repository.find_by_id(id)
    }
}
