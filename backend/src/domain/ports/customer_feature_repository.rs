//! Port for per-customer feature flags.

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by customer feature adapters.
    pub enum CustomerFeatureRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "customer feature connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "customer feature query failed: {message}",
    }
}

/// Read access to the account-level feature switches of a customer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerFeatureRepository: Send + Sync {
    /// Whether the customer's account has the support feature switched on.
    ///
    /// Unknown customers report `false`.
    async fn support_enabled(
        &self,
        user_id: UserId,
    ) -> Result<bool, CustomerFeatureRepositoryError>;
}

/// Repository answering with a fixed value for every customer.
#[derive(Debug, Clone, Copy)]
pub struct FixtureCustomerFeatureRepository {
    support: bool,
}

impl FixtureCustomerFeatureRepository {
    /// Report `support` for everyone.
    pub fn new(support: bool) -> Self {
        Self { support }
    }
}

impl Default for FixtureCustomerFeatureRepository {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl CustomerFeatureRepository for FixtureCustomerFeatureRepository {
    async fn support_enabled(
        &self,
        _user_id: UserId,
    ) -> Result<bool, CustomerFeatureRepositoryError> {
        Ok(self.support)
    }
}
