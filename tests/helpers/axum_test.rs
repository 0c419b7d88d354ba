// ABOUTME: Axum HTTP testing utilities for integration tests
// ABOUTME: Drives routers with oneshot requests carrying JSON or raw byte bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use axum::body::{to_bytes, Body, Bytes};
use axum::http::header::{CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;
use smart_recipes::errors::ErrorResponse;
use tower::ServiceExt;

/// One in-process request against a router
pub struct AxumTestRequest {
    method: Method,
    uri: String,
    headers: HeaderMap,
    body: Bytes,
}

impl AxumTestRequest {
    fn with_method(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_owned(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::with_method(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::with_method(Method::POST, uri)
    }

    pub fn delete(uri: &str) -> Self {
        Self::with_method(Method::DELETE, uri)
    }

    pub fn put(uri: &str) -> Self {
        Self::with_method(Method::PUT, uri)
    }

    pub fn options(uri: &str) -> Self {
        Self::with_method(Method::OPTIONS, uri)
    }

    /// Set a header, replacing any earlier value
    pub fn header(mut self, name: &str, value: &str) -> Self {
        let name = HeaderName::from_bytes(name.as_bytes()).expect("valid header name");
        let value = HeaderValue::from_str(value).expect("valid header value");
        self.headers.insert(name, value);
        self
    }

    /// Send an `Origin` header, as a browser would
    pub fn origin(self, origin: &str) -> Self {
        self.header(ORIGIN.as_str(), origin)
    }

    /// Serialize `data` as the JSON body
    pub fn json<T: Serialize>(mut self, data: &T) -> Self {
        self.body = Bytes::from(serde_json::to_vec(data).expect("serializable body"));
        self.header(CONTENT_TYPE.as_str(), "application/json")
    }

    /// Raw image bytes, sent as `application/octet-stream`
    pub fn bytes(mut self, data: &[u8]) -> Self {
        self.body = Bytes::copy_from_slice(data);
        self.header(CONTENT_TYPE.as_str(), "application/octet-stream")
    }

    pub async fn send(self, app: Router) -> AxumTestResponse {
        let mut request = Request::builder()
            .method(self.method)
            .uri(self.uri)
            .body(Body::from(self.body))
            .expect("valid request");
        *request.headers_mut() = self.headers;

        let response = app.oneshot(request).await.expect("router never fails");
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable response body");

        AxumTestResponse {
            status,
            headers,
            body,
        }
    }
}

/// A fully read response
pub struct AxumTestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl AxumTestResponse {
    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    pub const fn status_code(&self) -> StatusCode {
        self.status
    }

    /// A response header as text, if present
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn bytes(self) -> Bytes {
        self.body
    }

    pub fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "response is not the expected JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The `error` field of an error body
    pub fn error(self) -> String {
        self.json::<ErrorResponse>().error
    }

    /// Fail the test with the body in the message when the status differs
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "unexpected status for body {}",
            String::from_utf8_lossy(&self.body)
        );
        self
    }
}
