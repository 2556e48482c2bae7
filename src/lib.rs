pub mod odds;
pub mod reports;
