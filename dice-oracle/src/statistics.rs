pub mod odds;
pub mod roller;
