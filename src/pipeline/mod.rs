// Pipelines — the enrichment transform and the fetch cycle around it.

pub mod enrich;
pub mod refresh;
pub mod summary;
