/// Handler for `GET /` — the only route this fixture serves.
///
/// Always answers 200 with the fixed greeting, whatever the request
/// headers or query string carry.
pub async fn home() -> &'static str {
    "Hello world!"
}
