// Content generation: turns a profile into resume and cover-letter narrative.
// The narrative backend sits behind the `NarrativeGenerator` trait; the service in
// front of it owns validation and the simulated remote latency.

pub mod handlers;
pub mod models;
pub mod narrative;
pub mod service;
pub mod templates;
