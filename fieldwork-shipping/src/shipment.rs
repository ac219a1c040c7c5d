use chrono::Utc;
use uuid::Uuid;

use crate::{
    Dashboard, DashboardError, NewShipment, Session, Shipment, ShipmentStatus, TrackingNumber,
};

/// Error type for shipment creation.
#[derive(Debug, thiserror::Error)]
pub enum ShipmentError {
    /// The form is incomplete or inconsistent; one message per field.
    #[error("invalid shipment: {}", .0.join(", "))]
    Invalid(Vec<String>),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

fn validate(input: &NewShipment) -> Vec<String> {
    let mut problems = Vec::new();
    if input.origin_address_id.trim().is_empty() {
        problems.push("An origin address is required".to_string());
    }
    if input.destination_address.trim().is_empty() {
        problems.push("The destination address is required".to_string());
    }
    if input.recipient_name.trim().is_empty() {
        problems.push("The recipient name is required".to_string());
    }
    match input.package_weight.trim().parse::<f64>() {
        Ok(weight) if weight > 0.0 => {}
        _ => problems.push("Enter a valid package weight".to_string()),
    }
    problems
}

/// Validate the form, stamp the generated fields (id, tracking number,
/// `Pending` status, creation time) and insert the shipment for the
/// signed-in user. The full row is returned so the caller can show the
/// tracking number immediately.
pub async fn create_shipment(
    dashboard: &dyn Dashboard,
    session: &Session,
    input: NewShipment,
) -> Result<Shipment, ShipmentError> {
    let problems = validate(&input);
    if !problems.is_empty() {
        return Err(ShipmentError::Invalid(problems));
    }

    let shipment = Shipment {
        id: Uuid::new_v4().simple().to_string(),
        user_id: session.user_id.clone(),
        tracking_number: TrackingNumber::generate(),
        origin_address_id: input.origin_address_id,
        destination_address: input.destination_address,
        recipient_name: input.recipient_name,
        recipient_phone: input.recipient_phone,
        recipient_email: input.recipient_email,
        package_weight: input.package_weight,
        package_dimensions: input.package_dimensions,
        package_description: input.package_description,
        pickup_date: input.pickup_date,
        status: ShipmentStatus::default(),
        created_at: Utc::now(),
    };

    tracing::info!(tracking = %shipment.tracking_number, "creating shipment");
    dashboard.insert_shipment(shipment.clone()).await?;
    Ok(shipment)
}

/// Case-insensitive search over tracking number, recipient name and status
/// label. A blank term matches everything.
pub fn filter_shipments<'a>(shipments: &'a [Shipment], term: &str) -> Vec<&'a Shipment> {
    let needle = term.trim().to_lowercase();
    shipments
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.tracking_number.as_str().to_lowercase().contains(&needle)
                || s.recipient_name.to_lowercase().contains(&needle)
                || s.status.to_string().to_lowercase().contains(&needle)
        })
        .collect()
}
