//! Client core for the civic engagement app: backend access, candidate
//! discovery, engagement controllers, profile metrics and text views.

pub mod api_client;
pub mod config;
pub mod discovery;
pub mod engagement;
pub mod errors;
pub mod fixtures;
pub mod models;
pub mod profile;
pub mod views;

#[cfg(test)]
mod testing;
