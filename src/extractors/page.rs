//! Extract the 1-based `page` query parameter.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};
use std::collections::HashMap;

pub const DEFAULT_PAGE: i64 = 1;

/// `?page=N`. Missing or non-integer values fall back to [`DEFAULT_PAGE`]; range checks
/// are left to pagination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(page_from_uri(&parts.uri))
    }
}

fn page_from_uri(uri: &Uri) -> Page {
    let page = Query::<HashMap<String, String>>::try_from_uri(uri)
        .ok()
        .and_then(|Query(params)| params.get("page").and_then(|v| v.trim().parse::<i64>().ok()))
        .unwrap_or(DEFAULT_PAGE);
    Page(page)
}
