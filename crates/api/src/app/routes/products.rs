use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::app::dto::{self, ProductIdParam, ValidatedProduct};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> Response {
    tracing::info!("handle GET products");

    match services.list() {
        Ok(products) => dto::render(StatusCode::OK, &products),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    ProductIdParam(id): ProductIdParam,
) -> Response {
    tracing::info!(product_id = %id, "handle GET product");

    match services.get(id) {
        Ok(product) => dto::render(StatusCode::OK, &product),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    ValidatedProduct(product): ValidatedProduct,
) -> Response {
    tracing::info!(name = %product.name, "handle POST product");

    match services.add(product) {
        Ok(created) => dto::render(StatusCode::CREATED, &created),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    ProductIdParam(id): ProductIdParam,
    ValidatedProduct(product): ValidatedProduct,
) -> Response {
    tracing::info!(product_id = %id, "handle PUT product");

    match services.update(id, product) {
        Ok(updated) => dto::render(StatusCode::OK, &updated),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    ProductIdParam(id): ProductIdParam,
) -> Response {
    tracing::info!(product_id = %id, "handle DELETE product");

    match services.delete(id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
