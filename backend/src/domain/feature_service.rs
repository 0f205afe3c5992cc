//! Customer feature entitlements.
//!
//! A customer may use the support system only when it is switched on for the
//! whole installation and enabled on the customer's account.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CustomerFeature, CustomerFeatureRepository, CustomerFeatureRepositoryError,
    FeatureEntitlements,
};
use crate::domain::{Error, UserId};

/// Entitlement service implementing [`FeatureEntitlements`].
#[derive(Clone)]
pub struct CustomerFeatureService<R> {
    features: Arc<R>,
    support_system_enabled: bool,
}

impl<R> CustomerFeatureService<R> {
    /// Create a service. `support_system_enabled` is the installation-wide
    /// switch.
    pub fn new(features: Arc<R>, support_system_enabled: bool) -> Self {
        Self {
            features,
            support_system_enabled,
        }
    }
}

impl<R> CustomerFeatureService<R>
where
    R: CustomerFeatureRepository,
{
    fn map_repository_error(error: CustomerFeatureRepositoryError) -> Error {
        match error {
            CustomerFeatureRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("customer features unavailable: {message}"))
            }
            CustomerFeatureRepositoryError::Query { message } => {
                Error::internal(format!("customer features error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> FeatureEntitlements for CustomerFeatureService<R>
where
    R: CustomerFeatureRepository,
{
    async fn has_feature(&self, user_id: UserId, feature: CustomerFeature) -> Result<bool, Error> {
        match feature {
            CustomerFeature::Support => {
                if !self.support_system_enabled {
                    return Ok(false);
                }
                self.features
                    .support_enabled(user_id)
                    .await
                    .map_err(Self::map_repository_error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockCustomerFeatureRepository;
    use rstest::rstest;

    fn user() -> UserId {
        UserId::new(7).expect("valid id")
    }

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, false)]
    #[tokio::test]
    async fn support_requires_account_flag_when_switched_on(
        #[case] system: bool,
        #[case] account: bool,
        #[case] expected: bool,
    ) {
        let mut repo = MockCustomerFeatureRepository::new();
        repo.expect_support_enabled()
            .times(1)
            .returning(move |_| Ok(account));
        let service = CustomerFeatureService::new(Arc::new(repo), system);

        let granted = service
            .has_feature(user(), CustomerFeature::Support)
            .await
            .expect("lookup succeeds");

        assert_eq!(granted, expected);
    }

    #[tokio::test]
    async fn disabled_support_system_skips_lookup() {
        let mut repo = MockCustomerFeatureRepository::new();
        repo.expect_support_enabled().never();
        let service = CustomerFeatureService::new(Arc::new(repo), false);

        let granted = service
            .has_feature(user(), CustomerFeature::Support)
            .await
            .expect("no lookup needed");

        assert!(!granted);
    }

    #[tokio::test]
    async fn lookup_failure_is_propagated() {
        let mut repo = MockCustomerFeatureRepository::new();
        repo.expect_support_enabled()
            .returning(|_| Err(CustomerFeatureRepositoryError::connection("timeout")));
        let service = CustomerFeatureService::new(Arc::new(repo), true);

        let err = service
            .has_feature(user(), CustomerFeature::Support)
            .await
            .expect_err("failure surfaces");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
