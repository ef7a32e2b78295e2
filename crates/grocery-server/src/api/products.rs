use axum::{
    extract::{Query, State},
    Extension, Json,
};
use grocery_kroger::ProductsResponse;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_query_error, parse_int_param, setup_client, ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProductsQuery {
    pub filter_term: Option<String>,
    pub location_id: Option<String>,
    pub filter_offset: Option<String>,
    pub filter_limit: Option<String>,
}

/// `GET /products?filterTerm=&locationId=&filterOffset=&filterLimit=`
pub(super) async fn get_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<ProductsQuery>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let filter_offset = parse_int_param("filterOffset", params.filter_offset.as_deref())?;
    let filter_limit = parse_int_param("filterLimit", params.filter_limit.as_deref())?;
    let filter_term = params.filter_term.unwrap_or_default();

    let client = setup_client(&state.kroger, &req_id).await?;
    let products = client
        .get_products(
            &filter_term,
            params.location_id.as_deref(),
            filter_offset,
            filter_limit,
        )
        .await
        .map_err(|e| map_query_error(&req_id, &e))?;

    tracing::debug!(
        request_id = %req_id.0,
        filter_term = %filter_term,
        count = products.data.len(),
        "returning products"
    );
    Ok(Json(products))
}
