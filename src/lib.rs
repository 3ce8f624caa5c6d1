pub mod handlers;
pub mod models;
pub mod query;
pub mod routes;
pub mod store;
pub mod utils;
