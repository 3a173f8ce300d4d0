//! Async client for the users API.

pub mod client;

pub use client::{ApiReply, CreateUserRequest, UsersClient};
pub use reqwest::StatusCode;
