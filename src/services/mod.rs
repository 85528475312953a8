/// OpenAPI documentation generation.
pub mod documentation;
/// Guide catalog and article detail read services.
pub mod guide_service;
/// Backend health probe.
pub mod health_service;
