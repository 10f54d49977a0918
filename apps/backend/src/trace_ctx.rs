//! Task-local trace id for the request currently being served.
//!
//! `RequestTrace` opens the scope; error rendering and DB error mapping read
//! it so log lines and problem+json bodies carry the same id.

use tokio::task_local;
use uuid::Uuid;

/// Returned when no request scope is active (startup, background tasks, unit tests).
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` visible to everything it awaits.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
