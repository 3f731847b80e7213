//! HTTP boundary for the booking engine.
//!
//! The form posts its current selections and renders the returned snapshot;
//! the engine itself holds no server-side state.

use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;

use super::catalog::Category;
use super::requests::QuoteRequest;
use super::responses::{CatalogResponse, CategoryConfigResponse};
use super::selection::{BookingSelection, FieldChange};
use super::view::DerivedView;

/// Build the booking API router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/catalog", get(catalog))
        .route("/api/catalog/:category", get(category_config))
        .route("/api/quote", post(quote))
}

async fn health() -> &'static str {
    "ok"
}

/// All four category configurations, in display order.
async fn catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        categories: Category::ALL
            .into_iter()
            .map(CategoryConfigResponse::for_category)
            .collect(),
    })
}

/// Configuration for one category; an unknown key is a 400, never a default.
async fn category_config(Path(category): Path<String>) -> Result<Json<CategoryConfigResponse>> {
    let category: Category = category.parse()?;
    Ok(Json(CategoryConfigResponse::for_category(category)))
}

/// Derive the full form snapshot for the posted selections.
///
/// Changes are applied in the same order the form fires them, so dependent
/// lists are repopulated and stale codes cleared before the total is read.
async fn quote(Json(req): Json<QuoteRequest>) -> Result<Json<DerivedView>> {
    let mut selection = BookingSelection::new();
    selection.apply(FieldChange::Category(req.category))?;
    selection.apply(FieldChange::Origin(req.origin))?;
    selection.apply(FieldChange::Destination(req.destination))?;
    selection.apply(FieldChange::Passengers(req.passengers))?;
    let view = selection.apply(FieldChange::FareClass(req.fare_class))?;
    Ok(Json(view))
}
