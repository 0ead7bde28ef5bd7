pub mod contact;
pub mod health;

pub use contact::create_contact;
pub use health::health_check;
