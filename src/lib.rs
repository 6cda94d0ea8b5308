pub mod app_setup;
pub mod bin_constants;
pub mod config;
pub mod data;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod sanitize;
pub mod store;
pub mod util;
