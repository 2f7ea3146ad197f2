pub async fn hello() -> &'static str {
    tracing::debug!("Greeting requested");
    "Hello World!"
}
