// neo-hazard: hazard ranking and impact estimates for near-Earth asteroids.
//
// This is the library root. Each module corresponds to a stage of the
// fetch -> validate -> estimate -> rank -> render flow.

pub mod asteroid;
pub mod backend;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod status;
