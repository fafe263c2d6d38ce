pub mod auth;
pub mod availability;
pub mod bookings;
pub mod reviews;
pub mod services;
pub mod vendors;
