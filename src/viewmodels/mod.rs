pub mod auth_viewmodel;
pub mod reservation_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use reservation_viewmodel::ReservationViewModel;
