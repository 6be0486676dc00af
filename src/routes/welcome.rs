/// Body returned by the welcome endpoint
pub const GREETING: &str = "Welcome to the School API!";

// GET|POST / - Liveness greeting
pub async fn welcome() -> &'static str {
    tracing::info!("Welcome endpoint processed a request");
    GREETING
}
