//! The query-document handler for the single API endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::schema::common::ApiResponse;
use crate::schema::query::QueryDocument;
use crate::state::AppState;

/// Resolves one structured query document against the record service.
///
/// `POST /query`
///
/// A malformed document (invalid JSON, unknown operation, missing args) is a
/// 400 with the structured error envelope. Reads of absent ids resolve to
/// `data: null`; writes addressed to absent ids surface as 404 error
/// responses via [`ApiError`].
pub async fn resolve(
    State(state): State<AppState>,
    payload: Result<Json<QueryDocument>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(doc) = payload?;
    let mut service = state.service.lock().await;

    let response = match doc {
        QueryDocument::People => ok(service.people()),
        QueryDocument::Cars => ok(service.cars()),
        QueryDocument::Person { id } => ok(service.person(&id)),
        QueryDocument::Car { id } => ok(service.car(&id)),
        QueryDocument::PersonWithCars { id } => ok(service.person_with_cars(&id)),
        QueryDocument::AddPerson {
            first_name,
            last_name,
        } => ok(service.add_person(&first_name, &last_name)?),
        QueryDocument::AddCar {
            year,
            make,
            model,
            price,
            person_id,
        } => ok(service.add_car(year, &make, &model, price, person_id)?),
        QueryDocument::UpdatePerson {
            id,
            first_name,
            last_name,
        } => ok(service.update_person(&id, first_name.as_deref(), last_name.as_deref())?),
        QueryDocument::UpdateCar {
            id,
            year,
            make,
            model,
            price,
        } => ok(service.update_car(&id, year, &make, &model, price)?),
        QueryDocument::DeletePerson { id } => ok(service.delete_person(&id)?),
        QueryDocument::DeleteCar { id } => ok(service.delete_car(&id)?),
    };

    Ok(response)
}

/// Wraps a payload in the success envelope and erases its type.
fn ok<T: Serialize>(data: T) -> Response {
    Json(ApiResponse::ok(data)).into_response()
}
