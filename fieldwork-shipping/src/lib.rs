//! Shipment dashboard domain for the fieldwork workspace.
//!
//! The dashboard is backed by a hosted database behind two narrow ports:
//! [`Auth`] for sessions and [`Dashboard`] for three independent,
//! owner-scoped tables (profiles, shipments, addresses). The domain logic
//! here - tracking-number generation, shipment creation and validation,
//! client-side list filtering - never sees the transport; in-memory port
//! implementations back the tests.

mod auth;
pub use auth::{Auth, AuthError, Credentials, MemoryAuth, Session, require_session};

mod dashboard;
pub use dashboard::{Dashboard, DashboardError, MemoryDashboard};

mod model;
pub use model::{Address, NewShipment, Profile, Shipment, ShipmentStatus};

mod shipment;
pub use shipment::{ShipmentError, create_shipment, filter_shipments};

mod tracking;
pub use tracking::TrackingNumber;
