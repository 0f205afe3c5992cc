use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::UserId;
use crate::domain::ports::{CustomerFeatureRepository, CustomerFeatureRepositoryError};

use super::lock;

/// Support switch per customer.
///
/// Customers default to `default_support` unless listed as an exception.
#[derive(Debug)]
pub struct InMemoryCustomerFeatures {
    default_support: bool,
    exceptions: Mutex<HashSet<UserId>>,
}

impl InMemoryCustomerFeatures {
    /// Every customer reports `default_support`.
    pub fn new(default_support: bool) -> Self {
        Self {
            default_support,
            exceptions: Mutex::new(HashSet::new()),
        }
    }

    /// Flip the support switch of `user_id` relative to the default.
    #[must_use]
    pub fn with_exception(mut self, user_id: UserId) -> Self {
        if let Ok(set) = self.exceptions.get_mut() {
            set.insert(user_id);
        }
        self
    }
}

#[async_trait]
impl CustomerFeatureRepository for InMemoryCustomerFeatures {
    async fn support_enabled(
        &self,
        user_id: UserId,
    ) -> Result<bool, CustomerFeatureRepositoryError> {
        let exceptions = lock(
            &self.exceptions,
            "customer features",
            CustomerFeatureRepositoryError::query,
        )?;
        Ok(self.default_support != exceptions.contains(&user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exceptions_invert_the_default() {
        let seven = UserId::new(7).expect("id");
        let eight = UserId::new(8).expect("id");
        let features = InMemoryCustomerFeatures::new(true).with_exception(eight);

        assert!(features.support_enabled(seven).await.expect("read"));
        assert!(!features.support_enabled(eight).await.expect("read"));
    }
}
