/// GET /api/v1/resume/health
/// Fixed plain-text liveness probe.
pub async fn health_handler() -> &'static str {
    "Resume Generator API is running"
}
