// Composition root for the vehicles service.
//
// Responsibilities:
// - Read config from environment.
// - Load the seed file and build the in memory store.
// - Wire the store into the HTTP router.

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod state;
