//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`AuditLog`]) are implemented by outbound
//! adapters. Driving ports (commands, queries, [`LoginService`],
//! [`FeatureEntitlements`]) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod audit_log;
mod customer_feature_repository;
mod feature_entitlements;
mod layout_preferences_repository;
mod layout_settings;
mod login_service;
mod ticket_deletion_command;
mod ticket_repository;

#[cfg(test)]
pub use audit_log::MockAuditLog;
pub use audit_log::{AuditLog, AuditLogError, FixtureAuditLog};
#[cfg(test)]
pub use customer_feature_repository::MockCustomerFeatureRepository;
pub use customer_feature_repository::{
    CustomerFeatureRepository, CustomerFeatureRepositoryError, FixtureCustomerFeatureRepository,
};
#[cfg(test)]
pub use feature_entitlements::MockFeatureEntitlements;
pub use feature_entitlements::{CustomerFeature, FeatureEntitlements, FixtureFeatureEntitlements};
#[cfg(test)]
pub use layout_preferences_repository::MockLayoutPreferencesRepository;
pub use layout_preferences_repository::{
    FixtureLayoutPreferencesRepository, LayoutPreferencesRepository,
    LayoutPreferencesRepositoryError,
};
#[cfg(test)]
pub use layout_settings::{MockLayoutSettingsCommand, MockLayoutSettingsQuery};
pub use layout_settings::{
    LayoutActionOutcome, LayoutSettingsCommand, LayoutSettingsQuery, LayoutView,
};
pub use login_service::{DisabledLoginService, FixtureLoginService, LoginService};
#[cfg(test)]
pub use ticket_deletion_command::MockTicketDeletionCommand;
pub use ticket_deletion_command::TicketDeletionCommand;
#[cfg(test)]
pub use ticket_repository::MockTicketRepository;
pub use ticket_repository::{FixtureTicketRepository, TicketRepository, TicketRepositoryError};
