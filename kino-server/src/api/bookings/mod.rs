mod booking_dto;
mod bookings;
mod create_booking_request;

pub use booking_dto::BookingDto;
pub use bookings::{create_booking, list_bookings};
pub use create_booking_request::CreateBookingRequest;
