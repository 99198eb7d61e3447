use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use once_cell::sync::Lazy;
use prometheus::{register_histogram, register_int_counter, Encoder, Histogram, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static CUSTOM_GAMES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "trivia_custom_games_created_total",
        "Total custom games persisted"
    )
    .expect("register custom_games_created_total")
});

pub static NOT_FOUND_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "trivia_not_found_total",
        "Total requests answered with 404"
    )
    .expect("register not_found_total")
});

pub static REQUEST_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "trivia_request_duration_seconds",
        "Request duration in seconds",
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register request_duration")
});

/// Middleware recording wall time of every request.
pub async fn track_duration(req: Request, next: Next) -> Response {
    let timer = REQUEST_DURATION.start_timer();
    let res = next.run(req).await;
    timer.observe_duration();
    res
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_metrics_are_exported() {
        CUSTOM_GAMES_CREATED_TOTAL.inc();
        REQUEST_DURATION.observe(0.01);
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("trivia_custom_games_created_total"));
        assert!(body.contains("trivia_request_duration_seconds"));
    }
}
