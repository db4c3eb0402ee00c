pub mod delete;
pub mod fetch;
pub mod permission;
pub mod upload;
