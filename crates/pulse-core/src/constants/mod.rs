// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Pulse fitness server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Formula coefficients for BMR, TDEE, macro splits, and BMI
pub mod nutrition;

/// Service names used in structured logging
pub mod service_names {
    /// Server binary service name
    pub const PULSE_SERVER: &str = "pulse-server";
    /// CLI binary service name
    pub const PULSE_CLI: &str = "pulse-cli";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Default limits
pub mod limits {
    /// Default number of progress entries returned by list endpoints
    pub const DEFAULT_PROGRESS_LIMIT: i64 = 100;
    /// Maximum number of progress entries returned by list endpoints
    pub const MAX_PROGRESS_LIMIT: i64 = 1000;
    /// Chat history messages loaded per assistant turn
    pub const CHAT_HISTORY_LIMIT: i64 = 50;
    /// Maximum chat messages returned by the history endpoint
    pub const MAX_CHAT_HISTORY_LIMIT: i64 = 200;
    /// Maximum accepted chat message length in characters
    pub const MAX_CHAT_MESSAGE_CHARS: usize = 2000;
    /// Saved plans returned by the plan history endpoint
    pub const DEFAULT_PLAN_LIMIT: i64 = 20;
    /// Maximum saved plans returned by the plan history endpoint
    pub const MAX_PLAN_LIMIT: i64 = 200;
    /// Maximum profile display name length in characters
    pub const MAX_DISPLAY_NAME_CHARS: usize = 100;
    /// Request body limit for JSON endpoints (bytes)
    pub const MAX_REQUEST_BODY_BYTES: usize = 256 * 1024;
}

/// Progress trend analysis
pub mod progress {
    /// Look-back window for the recent weight change (days)
    pub const RECENT_WINDOW_DAYS: i64 = 30;
    /// Absolute change under which the trend counts as maintaining (kg)
    pub const TREND_THRESHOLD_KG: f64 = 0.5;
}
