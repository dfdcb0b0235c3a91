pub mod admin;
pub mod health;
pub mod images;
pub mod owners;
pub mod properties;
pub mod reports;
pub mod search;
pub mod traces;
