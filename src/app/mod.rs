pub mod dashboard;
pub mod render;
pub mod services;

pub use dashboard::{Dashboard, DashboardState, Selection};
