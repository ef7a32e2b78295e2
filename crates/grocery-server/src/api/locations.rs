use axum::{
    extract::{Query, State},
    Extension, Json,
};
use grocery_kroger::LocationsResponse;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_query_error, parse_int_param, setup_client, ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LocationsQuery {
    pub zipcode: Option<String>,
    pub filter_limit: Option<String>,
}

/// `GET /locations?zipcode=&filterLimit=`
pub(super) async fn get_locations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<LocationsQuery>,
) -> Result<Json<LocationsResponse>, ApiError> {
    let filter_limit = parse_int_param("filterLimit", params.filter_limit.as_deref())?;
    let zip_code = params.zipcode.unwrap_or_default();

    let client = setup_client(&state.kroger, &req_id).await?;
    let locations = client
        .get_locations(&zip_code, filter_limit)
        .await
        .map_err(|e| map_query_error(&req_id, &e))?;

    tracing::debug!(
        request_id = %req_id.0,
        zip_code = %zip_code,
        count = locations.data.len(),
        "returning locations"
    );
    Ok(Json(locations))
}
