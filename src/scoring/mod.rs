// Hazard estimators — closed-form, order-of-magnitude approximations.
//
// Each estimator is a pure function of a few raw fields. The pipeline
// calls them in dependency order: energy first, then the scale and crater
// estimates that consume it, with importance computed from raw fields only.

pub mod crater;
pub mod energy;
pub mod importance;
pub mod torino;
pub mod zones;
