//! Opstalverzekering handlers

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

use core_kernel::{KlantId, OpstalverzekeringId};

use crate::dto::opstalverzekering::{CreateOpstalverzekeringRequest, OpstalverzekeringResponse};
use crate::dto::SetEinddatumRequest;
use crate::{error::ApiError, AppState};

/// Writes a new policy for an active customer
///
/// The `Location` header points at the lookup by policy number.
pub async fn create_opstalverzekering(
    State(state): State<AppState>,
    request: Result<Json<CreateOpstalverzekeringRequest>, JsonRejection>,
) -> Result<
    (StatusCode, [(header::HeaderName, String); 1], Json<OpstalverzekeringResponse>),
    ApiError,
> {
    let Json(request) = request?;
    let verzekering = state.verzekeringen.create(request.into()).await?;

    let location = format!("/api/opstalverzekeringen/polisnummer/{}", verzekering.polis_nummer);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(verzekering.into()),
    ))
}

/// Gets the active policy with the given number
pub async fn get_by_polis_nummer(
    State(state): State<AppState>,
    polis_nummer: Result<Path<i32>, PathRejection>,
) -> Result<Json<OpstalverzekeringResponse>, ApiError> {
    let Path(polis_nummer) = polis_nummer?;
    let verzekering = state.verzekeringen.get_by_polis_nummer(polis_nummer).await?;
    Ok(Json(verzekering.into()))
}

/// Lists the active policies of a customer
pub async fn get_by_klant(
    State(state): State<AppState>,
    klant_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<OpstalverzekeringResponse>>, ApiError> {
    let Path(klant_id) = klant_id?;
    let verzekeringen = state
        .verzekeringen
        .get_by_klant(KlantId::from_uuid(klant_id))
        .await?;
    Ok(Json(verzekeringen.into_iter().map(Into::into).collect()))
}

/// Lists active policies with exactly this coverage type
pub async fn get_by_type_dekking(
    State(state): State<AppState>,
    type_dekking: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<OpstalverzekeringResponse>>, ApiError> {
    let Path(type_dekking) = type_dekking?;
    let verzekeringen = state.verzekeringen.get_by_type_dekking(&type_dekking).await?;
    Ok(Json(verzekeringen.into_iter().map(Into::into).collect()))
}

/// Ends a policy
pub async fn set_einddatum(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Bytes,
) -> Result<Json<OpstalverzekeringResponse>, ApiError> {
    let Path(id) = id?;
    let request = SetEinddatumRequest::from_body(&body)?;
    let verzekering = state
        .verzekeringen
        .set_einddatum(OpstalverzekeringId::from_uuid(id), request.eind_datum)
        .await?;
    Ok(Json(verzekering.into()))
}
