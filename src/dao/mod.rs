/// Domain-level read operations over the article table.
pub mod articles;
/// Backend row definitions.
pub mod models;
/// PostgREST query gateway.
pub mod postgrest;
