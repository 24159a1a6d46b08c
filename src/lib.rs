pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod services;
pub mod state;
