pub mod availability;
pub mod health;
pub mod horses;
pub mod instructors;
pub mod lessons;
pub mod messages;
pub mod rentals;
pub mod users;
