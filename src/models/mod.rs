pub mod auth;
pub mod reservation;
pub mod seat;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, SignupRequest};
pub use reservation::{AttendeeInfo, ReservationOutcome, ReservationRequest, ReservationResponse};
pub use seat::Seat;
pub use user::User;
