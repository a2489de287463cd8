use axum::Json;
use menu_core::landing::{landing_page, LandingPage};

pub async fn home_handler() -> Json<LandingPage> {
    Json(landing_page())
}
