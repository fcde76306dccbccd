use crate::domain::model::Location;
use crate::domain::ports::{ConfigProvider, LocationRepository};

/// 啟動時建好、之後不再變動的地點表
#[derive(Debug, Clone)]
pub struct StaticLocationRepository {
    locations: Vec<Location>,
}

impl StaticLocationRepository {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.locations().to_vec())
    }
}

impl Default for StaticLocationRepository {
    fn default() -> Self {
        Self::new(default_locations())
    }
}

impl LocationRepository for StaticLocationRepository {
    fn list_all(&self) -> Vec<Location> {
        self.locations.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<Location> {
        self.locations.iter().find(|location| location.id == id).cloned()
    }
}

pub fn default_locations() -> Vec<Location> {
    vec![
        Location::new("lisbon", "Lisbon", "Portugal", 38.7169, -9.1399),
        Location::new("funchal", "Funchal", "Portugal", 32.6496, -16.9086),
    ]
}
