//! Shared helpers for WASM API operations
//!
//! This module contains common patterns and utilities for serialization,
//! error handling, and validation across all API operations.

use wasm_bindgen::prelude::*;
use serde::Serialize;

// ============================================================================
// Logging Macros
// ============================================================================
//
// These go through the `log` facade; in the browser the `console_log`
// backend installed at start-up forwards them to the console.

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros and `api_error`)
// ============================================================================

pub fn log_debug(msg: &str) {
    log::debug!("[WASM] {}", msg);
}

pub fn log_info(msg: &str) {
    log::info!("[WASM] {}", msg);
}

pub fn log_warn(msg: &str) {
    log::warn!("[WASM] ⚠️ {}", msg);
}

pub fn log_error(msg: &str) {
    log::error!("[WASM] ❌ {}", msg);
}

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Serialize a value to a plain JavaScript object with automatic error handling
///
/// Maps become objects rather than `Map`s so reports read naturally from JS.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Validate a meter name argument
pub fn validate_meter_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Meter name must not be empty".to_string());
    }
    if name.trim() != name {
        return Err(format!("Meter name '{}' has surrounding whitespace", name));
    }
    Ok(())
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation or load error to a JsValue
pub fn api_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}
