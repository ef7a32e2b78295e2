//! Wire types for the Kroger public API.
//!
//! Every record decodes tolerantly: a field the API omits comes back as its
//! zero value rather than failing the whole response. Records serialize with
//! the same camelCase keys they were read with, so an envelope can be handed
//! to the frontend unchanged.

mod location;
mod product;

use serde::{Deserialize, Serialize};

pub use location::{Address, Department, Geolocation, Hours, Location, WeekdayHours};
pub use product::{
    AisleLocation, Fulfillment, Image, ImageSize, Inventory, Item, ItemInformation, Price,
    Product, Temperature,
};

/// Paginated response wrapper shared by the search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Meta,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            meta: Meta::default(),
        }
    }
}

/// Response of `GET /locations`.
pub type LocationsResponse = Envelope<Location>;

/// Response of `GET /products`.
pub type ProductsResponse = Envelope<Product>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub pagination: Pagination,
    pub warnings: Vec<String>,
}

/// Position of a page within the full result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub total: i64,
    pub start: i64,
    pub limit: i64,
}

/// Body of a successful `POST /connect/oauth2/token`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    pub expires_in: i64,
    pub access_token: String,
    pub token_type: String,
}

/// Error body the API returns with 400 and 500 responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiErrorResponse {
    pub errors: ApiErrorDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiErrorDetail {
    pub timestamp: i64,
    pub code: String,
    pub reason: String,
}

/// Error body the OAuth2 endpoint returns with 401 responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthErrorResponse {
    pub error: String,
    pub error_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_tolerates_missing_meta() {
        let parsed: LocationsResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.meta.pagination, Pagination::default());
    }

    #[test]
    fn envelope_reads_pagination_and_warnings() {
        let parsed: ProductsResponse = serde_json::from_str(
            r#"{"data": [], "meta": {"pagination": {"total": 312, "start": 5, "limit": 1}, "warnings": ["slow"]}}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.meta.pagination,
            Pagination {
                total: 312,
                start: 5,
                limit: 1
            }
        );
        assert_eq!(parsed.meta.warnings, vec!["slow".to_string()]);
    }

    #[test]
    fn api_error_response_reads_nested_reason() {
        let parsed: ApiErrorResponse = serde_json::from_str(
            r#"{"errors": {"timestamp": 1564159296913, "code": "Location-4xx-400", "reason": "Field 'zipCode.near' is invalid"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.errors.code, "Location-4xx-400");
        assert_eq!(parsed.errors.reason, "Field 'zipCode.near' is invalid");
    }
}
