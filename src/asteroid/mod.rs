// Asteroid records — the raw rows the backend serves and the enriched
// records the pipeline produces from them.
//
// Validation lives next to the models so every consumer of a raw record
// goes through the same boundary before any estimator runs.

pub mod models;
pub mod validate;
