use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use validator::Validate;
use villa_data::{DataError, Repository};

use crate::error::{validation_messages, ApiError};
use crate::models::villa::{CreateVillaRequest, PatchVillaRequest, UpdateVillaRequest, VillaDto};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Routes for the villa resource, mounted at the API root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/VillaAPI", get(list_villas).post(create_villa))
        .route(
            "/api/VillaAPI/{id}",
            get(get_villa)
                .put(update_villa)
                .patch(patch_villa)
                .delete(delete_villa),
        )
}

async fn list_villas(State(state): State<AppState>) -> Result<ApiResponse, ApiError> {
    let villas = state.villas.find_all().await?;
    let dtos: Vec<VillaDto> = villas.into_iter().map(VillaDto::from).collect();
    Ok(ApiResponse::success(StatusCode::OK, dtos))
}

async fn get_villa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse, ApiError> {
    if id == 0 {
        return Err(ApiError::BadRequest("id must not be zero".into()));
    }
    match state.villas.find_by_id(&id).await? {
        Some(villa) => Ok(ApiResponse::success(StatusCode::OK, VillaDto::from(villa))),
        None => Err(ApiError::NotFound(format!("villa {id} not found"))),
    }
}

async fn create_villa(
    State(state): State<AppState>,
    Json(body): Json<CreateVillaRequest>,
) -> Result<Response, ApiError> {
    body.validate()
        .map_err(|e| ApiError::Validation(validation_messages(&e)))?;

    // Friendly pre-check; the NOCASE unique index closes the race.
    if state.villas.find_by_name(&body.name).await?.is_some() {
        return Err(ApiError::BadRequest("Villa already exists".into()));
    }

    let created = match state.villas.save(&body.into_villa()).await {
        Ok(villa) => villa,
        Err(DataError::Conflict(_)) => {
            return Err(ApiError::BadRequest("Villa already exists".into()))
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(id = created.id, name = %created.name, "villa created");
    let location = format!("/api/VillaAPI/{}", created.id);
    let envelope = ApiResponse::success(StatusCode::CREATED, VillaDto::from(created));
    Ok(([(header::LOCATION, location)], envelope).into_response())
}

async fn update_villa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateVillaRequest>,
) -> Result<StatusCode, ApiError> {
    match body.id {
        Some(body_id) if body_id == id => {}
        _ => return Err(ApiError::BadRequest("body id must match path id".into())),
    }
    body.validate()
        .map_err(|e| ApiError::Validation(validation_messages(&e)))?;

    state.villas.update(&body.into_villa(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn patch_villa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<PatchVillaRequest>,
) -> Result<StatusCode, ApiError> {
    if id == 0 {
        return Err(ApiError::BadRequest("id must not be zero".into()));
    }
    let Some(current) = state.villas.find_by_id(&id).await? else {
        return Err(ApiError::BadRequest(format!("villa {id} not found")));
    };

    // Merge the present fields onto the current row, then re-validate the
    // whole document; nothing is written when validation fails.
    let mut doc = UpdateVillaRequest::from(&current);
    patch.apply_to(&mut doc);
    doc.validate()
        .map_err(|e| ApiError::Validation(validation_messages(&e)))?;

    state.villas.update(&doc.into_villa(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_villa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if id == 0 {
        return Err(ApiError::BadRequest("id must not be zero".into()));
    }
    state.villas.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
