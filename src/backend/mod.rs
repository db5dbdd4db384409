// Backend — the service that supplies asteroid records and AI reports.
//
// The traits are the seams the rest of the crate depends on; the HTTP
// client is the production implementation. Tests plug in fixture sources.

pub mod client;
pub mod error;
pub mod traits;
