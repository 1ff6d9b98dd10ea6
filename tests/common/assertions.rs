//! Domain-specific assertion macros for college-info harnesses.
//!
//! These add failure messages that say which ordering or envelope rule broke
//! and on which element, instead of a bare `assert!` line number.

// ---------------------------------------------------------------------------
// Ordering assertions
// ---------------------------------------------------------------------------

/// Assert that `key(item)` is non-increasing across `items`.
///
/// ```rust
/// assert_sorted_desc!(result.items, |c| c.ranking.unwrap_or(0));
/// ```
#[macro_export]
macro_rules! assert_sorted_desc {
    ($items:expr, $key:expr) => {{
        let keys: Vec<_> = $items.iter().map($key).collect();
        for (i, pair) in keys.windows(2).enumerate() {
            if pair[0] < pair[1] {
                panic!(
                    "assert_sorted_desc! failed at index {}:\n  items[{}] key = {:?}\n  items[{}] key = {:?}",
                    i,
                    i,
                    pair[0],
                    i + 1,
                    pair[1]
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Envelope assertions
// ---------------------------------------------------------------------------

/// Assert a successful envelope and return a reference to its `data`.
#[macro_export]
macro_rules! assert_envelope_ok {
    ($body:expr) => {{
        let body: &serde_json::Value = &$body;
        if body["success"] != serde_json::Value::Bool(true) {
            panic!("assert_envelope_ok! failed: success is not true\n  body: {}", body);
        }
        if !body["message"].is_string() {
            panic!("assert_envelope_ok! failed: message missing\n  body: {}", body);
        }
        &body["data"]
    }};
}

/// Assert a failure envelope (`success: false`, `data: null`) carrying
/// `message`.
#[macro_export]
macro_rules! assert_envelope_err {
    ($body:expr, $message:expr) => {{
        let body: &serde_json::Value = &$body;
        let expected: &str = $message;
        if body["success"] != serde_json::Value::Bool(false) || !body["data"].is_null() {
            panic!(
                "assert_envelope_err! failed: not a failure envelope\n  body: {}",
                body
            );
        }
        if body["message"] != expected {
            panic!(
                "assert_envelope_err! failed:\n  expected message: {:?}\n  actual body: {}",
                expected, body
            );
        }
    }};
}
