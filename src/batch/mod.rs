//! Batch orchestration over keyed diff payloads.
//!
//! A payload maps opaque string keys (e.g. sanitized file paths) to diff
//! inputs. The orchestrator is handed the payload and an explicit list of
//! registered target keys, and renders each registered key present in the
//! payload exactly once. Registration is explicit by design: the caller
//! enumerates its targets instead of the engine discovering them from
//! ambient state, which keeps the fan-out testable.

mod orchestrator;
mod payload;


// Re-export public API
pub use orchestrator::BatchOrchestrator;
pub use payload::DiffPayload;
