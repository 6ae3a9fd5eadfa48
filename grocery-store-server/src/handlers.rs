//! Customer request handlers.
//!
//! Each handler parses the path and body, calls exactly one service
//! operation and converts its outcome. No business rules live here.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use grocery_store_api::domain::customer::{
    CustomerForCreation, CustomerForDisplay, CustomerForUpdate,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::state::AppState;

pub const CUSTOMERS_PATH: &str = "/customers";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerForDisplay>>, ApiError> {
    let customers = state.customers.list().await?;
    Ok(Json(customers))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CustomerForDisplay>, ApiError> {
    let id = parse_customer_id(&raw_id)?;
    let customer = state
        .customers
        .get_by_id(id)
        .await
        .map_err(|error| ApiError::from_service(error, &raw_id))?;
    Ok(Json(customer))
}

pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerForCreation>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(candidate) = payload?;

    let created = state.customers.create(candidate).await?;
    let location = format!("{}/{}", CUSTOMERS_PATH, created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<CustomerForUpdate>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_customer_id(&raw_id)?;
    let candidate = match payload {
        Ok(Json(candidate)) => candidate,
        Err(rejection) => {
            // An unknown id outranks an unreadable body
            let exists = state
                .customers
                .exists(id)
                .await
                .map_err(|error| ApiError::from_service(error, &raw_id))?;
            if !exists {
                return Err(ApiError::NotFound(raw_id));
            }
            return Err(rejection.into());
        }
    };

    state
        .customers
        .update(id, candidate)
        .await
        .map_err(|error| ApiError::from_service(error, &raw_id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_customer_id(&raw_id).map_err(ApiError::for_delete)?;

    state
        .customers
        .delete(id)
        .await
        .map_err(|error| ApiError::from_service(error, &raw_id).for_delete())?;
    Ok(StatusCode::NO_CONTENT)
}

/// A segment that is not a UUID counts as an invalid id. The nil UUID
/// parses here and is rejected by the service.
fn parse_customer_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::InvalidId(raw.to_string()))
}
