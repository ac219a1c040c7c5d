use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::TrackingNumber;

/// Where a shipment is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShipmentStatus {
    #[default]
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
    Cancelled,
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        };
        write!(f, "{label}")
    }
}

/// One user's account profile. Keyed by the owning user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A saved origin address, owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// A shipment row, owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub user_id: String,
    pub tracking_number: TrackingNumber,
    pub origin_address_id: String,
    pub destination_address: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_email: String,
    pub package_weight: String,
    pub package_dimensions: String,
    pub package_description: String,
    pub pickup_date: String,
    pub status: ShipmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Form input for creating a shipment; everything the user types, nothing
/// generated. Field values are carried as entered and validated in
/// [`crate::create_shipment`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewShipment {
    pub origin_address_id: String,
    pub destination_address: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_email: String,
    pub package_weight: String,
    pub package_dimensions: String,
    pub package_description: String,
    pub pickup_date: String,
}
