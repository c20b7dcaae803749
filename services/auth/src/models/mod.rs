//! Authentication service models

pub mod user;

pub use user::{LoginRequest, LoginResponse, RegisterRequest};
