pub mod booking_repository;
pub mod identity_repository;
