//! Plant HTTP Routes
//!
//! CRUD endpoints over the plant catalogue:
//!
//! - `GET /plants` - list every plant
//! - `POST /plants` - create a plant
//! - `GET /plants/:id` - fetch one plant
//! - `PATCH /plants/:id` - partial update
//! - `DELETE /plants/:id` - remove a plant

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, routing::get, Json, Router};

use crate::plants::{NewPlant, Plant, PlantPatch, PlantRepository};

use super::errors::{ApiError, ApiResult};
use super::extract::{JsonBody, PlantId};

// ==================
// Shared State
// ==================

/// Plant state shared across handlers
pub struct PlantsState {
    pub repo: PlantRepository,
}

impl PlantsState {
    pub fn new(repo: PlantRepository) -> Self {
        Self { repo }
    }
}

// ==================
// Plant Routes
// ==================

/// Create plant routes
pub fn plant_routes(state: Arc<PlantsState>) -> Router {
    Router::new()
        .route("/plants", get(list_plants_handler).post(create_plant_handler))
        .route(
            "/plants/:id",
            get(get_plant_handler)
                .patch(update_plant_handler)
                .delete(delete_plant_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_plants_handler(
    State(state): State<Arc<PlantsState>>,
) -> ApiResult<Json<Vec<Plant>>> {
    let plants = state.repo.list_all().await?;
    Ok(Json(plants))
}

async fn create_plant_handler(
    State(state): State<Arc<PlantsState>>,
    JsonBody(new_plant): JsonBody<NewPlant>,
) -> ApiResult<(StatusCode, Json<Plant>)> {
    let plant = state
        .repo
        .create(new_plant)
        .await
        .map_err(ApiError::from_create)?;
    Ok((StatusCode::CREATED, Json(plant)))
}

async fn get_plant_handler(
    State(state): State<Arc<PlantsState>>,
    PlantId(id): PlantId,
) -> ApiResult<Json<Plant>> {
    let plant = state.repo.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(plant))
}

/// A missing plant is reported before the body is parsed.
async fn update_plant_handler(
    State(state): State<Arc<PlantsState>>,
    PlantId(id): PlantId,
    body: Bytes,
) -> ApiResult<Json<Plant>> {
    if state.repo.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    let JsonBody(patch) = JsonBody::<PlantPatch>::parse(&body)?;

    let plant = state
        .repo
        .update(id, patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(plant))
}

async fn delete_plant_handler(
    State(state): State<Arc<PlantsState>>,
    PlantId(id): PlantId,
) -> ApiResult<StatusCode> {
    if state.repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
