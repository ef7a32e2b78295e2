use serde::{Deserialize, Serialize};

/// A single store returned by `GET /locations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    pub location_id: String,
    pub chain: String,
    pub address: Address,
    pub geolocation: Geolocation,
    /// Store display name. Read from `name` (older payloads capitalize it)
    /// and written as `Name`, the key the frontend store picker reads.
    #[serde(rename(serialize = "Name", deserialize = "name"), alias = "Name")]
    pub name: String,
    pub hours: Hours,
    pub phone: String,
    pub departments: Vec<Department>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub county: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Geolocation {
    pub latitude: f64,
    pub longitude: f64,
    /// `"lat,lng"` as a single string.
    pub lat_lng: String,
}

/// Weekly opening hours of a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hours {
    pub timezone: String,
    pub gmt_offset: String,
    pub open24: bool,
    pub monday: WeekdayHours,
    pub tuesday: WeekdayHours,
    pub wednesday: WeekdayHours,
    pub thursday: WeekdayHours,
    pub friday: WeekdayHours,
    pub saturday: WeekdayHours,
    pub sunday: WeekdayHours,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeekdayHours {
    pub open: String,
    pub close: String,
    pub open24: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Department {
    pub department_id: String,
    pub name: String,
}
