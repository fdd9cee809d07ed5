//! Cart API Bindings
//!
//! Requests against the backend's cart item endpoints, and the transport
//! that carries them.

mod cart_items;
mod fetch;

use futures::future::LocalBoxFuture;

use crate::error::CartError;

pub use cart_items::*;
pub use fetch::FetchTransport;

/// Only this status counts as success
pub const STATUS_OK: u16 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<&'static str>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartResponse {
    pub status: u16,
    pub body: String,
}

impl CartResponse {
    /// 200 is success; anything else carries the body as the error text
    pub fn into_result(self) -> Result<(), CartError> {
        if self.status == STATUS_OK {
            Ok(())
        } else {
            Err(CartError::Status { status: self.status, body: self.body })
        }
    }
}

pub type PendingResponse = LocalBoxFuture<'static, Result<CartResponse, CartError>>;

/// Sends one request per call.
///
/// The request must be on its way when `send` returns; the future only
/// waits for the response. Responses may resolve in any order.
pub trait CartTransport {
    fn send(&self, request: CartRequest) -> PendingResponse;
}
