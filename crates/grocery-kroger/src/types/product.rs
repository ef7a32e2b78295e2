use serde::{Deserialize, Serialize};

/// A single product returned by `GET /products`.
///
/// Pricing, inventory, and aisle data are only populated when the query is
/// scoped to a store with `filter.locationId`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub upc: String,
    pub brand: String,
    pub country_origin: String,
    pub categories: Vec<String>,
    pub description: String,
    pub aisle_locations: Vec<AisleLocation>,
    pub items: Vec<Item>,
    pub item_information: ItemInformation,
    pub temperature: Temperature,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AisleLocation {
    pub bay_number: String,
    pub description: String,
    pub number: String,
    pub number_of_facings: String,
    pub sequence_number: String,
    pub side: String,
    pub shelf_number: String,
    pub shelf_position_in_bay: String,
}

/// One purchasable size or variant of a [`Product`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    pub inventory: Inventory,
    pub favorite: bool,
    pub fulfillment: Fulfillment,
    /// Price at the store given by `filter.locationId`.
    pub price: Price,
    pub national_price: Price,
    pub size: String,
    /// Unit of sale, e.g. `"UNIT"` or `"WEIGHT"`.
    pub sold_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Inventory {
    pub stock_level: String,
}

/// Fulfillment channels. The API spells these keys in lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "lowercase")]
pub struct Fulfillment {
    pub curbside: bool,
    pub delivery: bool,
    pub instore: bool,
    pub shiptohome: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Price {
    pub regular: f64,
    pub promo: f64,
    pub regular_per_unit_estimate: f64,
    pub promo_per_unit_estimate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemInformation {
    pub depth: String,
    pub height: String,
    pub width: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Temperature {
    pub indicator: String,
    pub heat_sensitive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub id: String,
    /// Camera angle, e.g. `"front"`, `"back"`, `"top"`.
    pub perspective: String,
    pub default: bool,
    pub sizes: Vec<ImageSize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSize {
    pub id: String,
    pub size: String,
    pub url: String,
}
