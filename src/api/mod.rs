// HTTP query API
// Read-only graph queries plus threshold rebuilds

pub mod handlers;
pub mod models;
pub mod routes;
