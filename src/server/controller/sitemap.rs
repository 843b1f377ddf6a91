//! Route listing served at `/`.

use axum::Json;
use std::sync::Arc;
use utoipa::openapi::OpenApi;

use crate::model::api::{RouteDto, SitemapDto};

/// Builds the route listing from the router's OpenAPI document.
///
/// Every route registered through the `OpenApiRouter` appears here, so the listing cannot
/// drift from the routing table. Routes are ordered by path, then GET, POST, PUT, PATCH,
/// DELETE.
pub fn build_sitemap(api: &OpenApi) -> SitemapDto {
    let mut routes = Vec::new();

    for (path, item) in api.paths.paths.iter() {
        let operations = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PUT", &item.put),
            ("PATCH", &item.patch),
            ("DELETE", &item.delete),
        ];

        for (method, operation) in operations {
            if operation.is_some() {
                routes.push(RouteDto {
                    method: method.to_string(),
                    path: path.clone(),
                });
            }
        }
    }

    SitemapDto { routes }
}

/// Get the route listing.
///
/// The listing is built once when the router is assembled and handed to this handler.
///
/// # Returns
/// - `200 OK` - Method and path of every API route
pub async fn get_sitemap(sitemap: Arc<SitemapDto>) -> Json<SitemapDto> {
    Json(sitemap.as_ref().clone())
}
