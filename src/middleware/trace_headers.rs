use axum::{extract::Request, middleware::Next, response::Response};

/// Middlware to trace request and response headers.
///
/// Useful to see the `Origin` and `Access-Control-*` headers exchanged with the browser client.
pub async fn trace_headers(req: Request, next: Next) -> Response {
    let incoming_headers = req.headers();
    tracing::trace!(?incoming_headers, "Request headers");

    let response = next.run(req).await;

    let outgoing_headers = response.headers();
    tracing::trace!(?outgoing_headers, "Response headers");

    response
}
