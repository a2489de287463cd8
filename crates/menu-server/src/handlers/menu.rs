use std::sync::Arc;

use axum::extract::{rejection::QueryRejection, Extension, Query};
use axum::Json;
use menu_core::display::{dish_count_label, DishCard, EmptyState};
use menu_core::{derive, subcategories_for, Category, FilterState, Selection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::AppState;
use crate::utils::ApiError;

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    /// Selections actually applied (impossible subcategory reset to "all")
    pub filters: FilterState,
    pub total: usize,
    pub summary: String,
    pub subcategories: Vec<String>,
    pub dishes: Vec<DishCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

pub async fn menu_handler(
    Extension(state): Extension<Arc<AppState>>,
    filters: Result<Query<FilterState>, QueryRejection>,
) -> Result<Json<MenuResponse>, ApiError> {
    let Query(filters) = filters.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let catalog = state.catalog()?;

    let filters = filters.normalized(catalog);
    debug!("Menu request: {:?}", filters);

    let dishes: Vec<DishCard> = derive(&catalog.items, &filters)
        .into_iter()
        .map(|item| DishCard::new(item, catalog))
        .collect();

    let total = dishes.len();
    let subcategories = subcategories_for(&filters.category, catalog).to_vec();

    Ok(Json(MenuResponse {
        summary: dish_count_label(total),
        empty_state: (total == 0).then(EmptyState::default),
        filters,
        total,
        subcategories,
        dishes,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SubcategoryQuery {
    #[serde(default)]
    pub category: Selection,
}

#[derive(Debug, Serialize)]
pub struct SubcategoryResponse {
    pub category: Selection,
    pub subcategories: Vec<String>,
}

pub async fn subcategories_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<SubcategoryQuery>,
) -> Result<Json<SubcategoryResponse>, ApiError> {
    let catalog = state.catalog()?;
    let subcategories = subcategories_for(&query.category, catalog).to_vec();

    Ok(Json(SubcategoryResponse {
        category: query.category,
        subcategories,
    }))
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
    pub total: usize,
}

pub async fn categories_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let catalog = state.catalog()?;
    let categories = catalog.categories.clone();
    let total = categories.len();

    Ok(Json(CategoriesResponse { categories, total }))
}
