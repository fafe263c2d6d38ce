pub mod jwt;
pub mod pricing;
