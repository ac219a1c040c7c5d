use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{Address, Profile, Shipment};

/// Error type for the hosted-table port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("row not found")]
    NotFound,

    #[error("dashboard backend failure: {0}")]
    Backend(String),
}

/// The hosted-database port: three independent tables - profiles,
/// shipments, addresses - each with owner-scoped row access.
///
/// Every method takes or carries the owning user id; implementations must
/// never return rows belonging to another user.
#[async_trait]
pub trait Dashboard: Send + Sync {
    async fn profile(&self, user_id: &str) -> Result<Option<Profile>, DashboardError>;
    async fn upsert_profile(&self, profile: Profile) -> Result<(), DashboardError>;

    async fn addresses(&self, user_id: &str) -> Result<Vec<Address>, DashboardError>;
    async fn insert_address(&self, address: Address) -> Result<(), DashboardError>;
    async fn update_address(&self, address: Address) -> Result<(), DashboardError>;
    async fn delete_address(&self, user_id: &str, address_id: &str)
    -> Result<(), DashboardError>;

    async fn shipments(&self, user_id: &str) -> Result<Vec<Shipment>, DashboardError>;
    async fn insert_shipment(&self, shipment: Shipment) -> Result<(), DashboardError>;
}

#[derive(Debug, Default)]
struct Tables {
    profiles: HashMap<String, Profile>,
    addresses: Vec<Address>,
    shipments: Vec<Shipment>,
}

/// In-memory dashboard implementation for tests.
#[derive(Debug, Default)]
pub struct MemoryDashboard {
    tables: Mutex<Tables>,
}

impl MemoryDashboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Dashboard for MemoryDashboard {
    async fn profile(&self, user_id: &str) -> Result<Option<Profile>, DashboardError> {
        let tables = self.tables.lock().expect("tables poisoned");
        Ok(tables.profiles.get(user_id).cloned())
    }

    async fn upsert_profile(&self, profile: Profile) -> Result<(), DashboardError> {
        let mut tables = self.tables.lock().expect("tables poisoned");
        tables.profiles.insert(profile.user_id.clone(), profile);
        Ok(())
    }

    async fn addresses(&self, user_id: &str) -> Result<Vec<Address>, DashboardError> {
        let tables = self.tables.lock().expect("tables poisoned");
        Ok(tables
            .addresses
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_address(&self, address: Address) -> Result<(), DashboardError> {
        let mut tables = self.tables.lock().expect("tables poisoned");
        tables.addresses.push(address);
        Ok(())
    }

    async fn update_address(&self, address: Address) -> Result<(), DashboardError> {
        let mut tables = self.tables.lock().expect("tables poisoned");
        let row = tables
            .addresses
            .iter_mut()
            .find(|a| a.id == address.id && a.user_id == address.user_id)
            .ok_or(DashboardError::NotFound)?;
        *row = address;
        Ok(())
    }

    async fn delete_address(
        &self,
        user_id: &str,
        address_id: &str,
    ) -> Result<(), DashboardError> {
        let mut tables = self.tables.lock().expect("tables poisoned");
        let before = tables.addresses.len();
        tables
            .addresses
            .retain(|a| !(a.id == address_id && a.user_id == user_id));
        if tables.addresses.len() == before {
            return Err(DashboardError::NotFound);
        }
        Ok(())
    }

    async fn shipments(&self, user_id: &str) -> Result<Vec<Shipment>, DashboardError> {
        let tables = self.tables.lock().expect("tables poisoned");
        Ok(tables
            .shipments
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_shipment(&self, shipment: Shipment) -> Result<(), DashboardError> {
        let mut tables = self.tables.lock().expect("tables poisoned");
        tables.shipments.push(shipment);
        Ok(())
    }
}
