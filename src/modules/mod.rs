pub mod access;
pub mod availability;
pub mod locations;
pub mod notifications;
