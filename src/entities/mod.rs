pub mod availability;
pub mod booking;
pub mod review;
pub mod service;
pub mod vendor;
