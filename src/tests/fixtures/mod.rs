pub mod bookings;
pub mod commands;
pub mod directory;
pub mod state;
