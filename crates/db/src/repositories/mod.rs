pub mod availability;
pub mod horse;
pub mod instructor;
pub mod lesson;
pub mod message;
pub mod rental;
pub mod user;
