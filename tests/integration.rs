//! End-to-end tests for the search pipeline and the overlay controller.

mod common;

#[path = "integration/pipeline.rs"]
mod pipeline;

#[path = "integration/overlay.rs"]
mod overlay;
