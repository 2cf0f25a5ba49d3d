//! Request extraction and JSON rendering for catalog records.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use catalog_core::{DomainError, ProductId, from_json, to_json};
use catalog_products::Product;

use crate::app::errors;

/// Request body decoded into a [`Product`] that already passed validation.
///
/// Rejects with 400 on malformed JSON and 422 on constraint violations.
#[derive(Debug)]
pub struct ValidatedProduct(pub Product);

#[async_trait]
impl<S> FromRequest<S> for ValidatedProduct
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let product: Product = from_json(body.as_ref()).map_err(|e| {
            tracing::debug!("rejecting product body: {e}");
            errors::domain_error_to_response(DomainError::from(e))
        })?;

        product.validate().map_err(|e| {
            tracing::debug!("product failed validation: {e}");
            errors::validation_error_to_response(&e)
        })?;

        Ok(Self(product))
    }
}

/// `:id` path segment parsed into a [`ProductId`].
///
/// Runs before any body extractor, so a bad id is a 400 even when the body
/// would also be rejected.
#[derive(Debug, Copy, Clone)]
pub struct ProductIdParam(pub ProductId);

#[async_trait]
impl<S> FromRequestParts<S> for ProductIdParam
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;
        parse_product_id(&raw).map(Self)
    }
}

/// Parse a `:id` path segment.
pub fn parse_product_id(raw: &str) -> Result<ProductId, Response> {
    raw.parse().map_err(|_| invalid_id())
}

fn invalid_id() -> Response {
    errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
}

/// Encode `value` with the catalog codec and wrap it in a JSON response.
pub fn render<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response {
    let mut buf = Vec::new();
    if let Err(e) = to_json(value, &mut buf) {
        return errors::domain_error_to_response(DomainError::from(e));
    }

    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        buf,
    )
        .into_response()
}
