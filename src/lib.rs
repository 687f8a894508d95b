pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod routes;
pub mod shutdown;
