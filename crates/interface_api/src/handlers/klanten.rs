//! Klant handlers

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    Json,
};
use uuid::Uuid;

use core_kernel::KlantId;

use crate::dto::klant::{CreateKlantRequest, KlantResponse};
use crate::dto::SetEinddatumRequest;
use crate::{error::ApiError, AppState};

/// Creates a customer
///
/// Responds 201 with the stored customer and a `Location` header pointing
/// at `GET /api/klanten/{id}`.
pub async fn create_klant(
    State(state): State<AppState>,
    request: Result<Json<CreateKlantRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<KlantResponse>), ApiError> {
    let Json(request) = request?;
    let klant = state.klanten.create(request.into()).await?;

    let location = format!("/api/klanten/{}", klant.id.as_uuid());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(klant.into()),
    ))
}

/// Gets a customer by ID, ended or not
pub async fn get_klant(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<KlantResponse>, ApiError> {
    let Path(id) = id?;
    let klant = state.klanten.get_by_id(KlantId::from_uuid(id)).await?;
    Ok(Json(klant.into()))
}

/// Ends the customer relationship
pub async fn set_einddatum(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Bytes,
) -> Result<Json<KlantResponse>, ApiError> {
    let Path(id) = id?;
    let request = SetEinddatumRequest::from_body(&body)?;
    let klant = state
        .klanten
        .set_einddatum(KlantId::from_uuid(id), request.eind_datum)
        .await?;
    Ok(Json(klant.into()))
}
