// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Layers applied to every route by the server router builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request span construction
pub use self::tracing::{request_id, request_span, REQUEST_ID_HEADER};
