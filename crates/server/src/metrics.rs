use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static DOCUMENTS_CREATED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "teskom_documents_created_total",
        "Documents written per collection",
        &["collection"]
    )
    .expect("register documents_created_total")
});

pub static DOCUMENTS_LISTED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "teskom_documents_listed_total",
        "Documents returned by list reads per collection",
        &["collection"]
    )
    .expect("register documents_listed_total")
});

pub static API_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "teskom_api_errors_total",
        "Error responses by HTTP status",
        &["status"]
    )
    .expect("register api_errors_total")
});

pub fn record_created(collection: &str) {
    DOCUMENTS_CREATED_TOTAL.with_label_values(&[collection]).inc();
}

pub fn record_listed(collection: &str, count: usize) {
    DOCUMENTS_LISTED_TOTAL.with_label_values(&[collection]).inc_by(count as u64);
}

pub fn record_error(status: StatusCode) {
    API_ERRORS_TOTAL.with_label_values(&[status.as_str()]).inc();
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
