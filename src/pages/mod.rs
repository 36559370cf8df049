//! Top-level route components.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod register;
