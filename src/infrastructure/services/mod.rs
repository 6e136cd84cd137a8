//! Request-facing services over the shared predictor

pub mod occupancy_service;
pub mod stay_service;

pub use occupancy_service::OccupancyService;
pub use stay_service::StayService;
