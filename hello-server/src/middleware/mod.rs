//! Cross-cutting request decorators.

pub mod capture;
pub mod logging;

pub use capture::CapturedResponse;
pub use logging::{AccessLog, AccessRecord, LoggingLayer, MemoryAccessLog, TracingAccessLog};
