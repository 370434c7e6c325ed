//! API handlers for the Kohalabel REST endpoints

pub mod health;
pub mod labels;
pub mod openapi;
