//! Scripted in-memory transport for exercising the gateway and API layers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::gateway::{ApiError, ApiRequest, ApiResponse, Transport};

/// Transport that replays a queued script of responses and records every
/// request it sees, in order.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
    sent: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and a JSON `body`.
    pub fn push_response(&self, status: u16, body: serde_json::Value) {
        self.script.borrow_mut().push_back(Ok(ApiResponse { status, body }));
    }

    /// Queue a transport-level failure.
    pub fn push_network_error(&self, message: &str) {
        self.script.borrow_mut().push_back(Err(ApiError::Network(message.to_owned())));
    }

    /// All requests sent so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    /// Requests sent to a specific path.
    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.sent.borrow().iter().filter(|r| r.path == path).cloned().collect()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, req: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.borrow_mut().push(req.clone());
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network(format!("no scripted response for {}", req.path))))
    }
}

/// Login/refresh response body carrying a token pair.
pub fn token_pair_body(access: &str, refresh: &str) -> serde_json::Value {
    serde_json::json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer"
    })
}

/// `/users/me` response body for a student account.
pub fn user_body(id: &str, username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": format!("{username}@campus.edu"),
        "username": username,
        "full_name": null,
        "role": "student",
        "is_verified": true,
        "is_active": true,
        "created_at": "2025-09-01T12:00:00Z"
    })
}
