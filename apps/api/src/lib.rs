pub mod config;
pub mod errors;
pub mod form;
pub mod generation;
pub mod profile;
pub mod render;
pub mod routes;
pub mod state;
