//! Driving port answering which optional features a customer may use.

use std::fmt;

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Optional customer-area feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerFeature {
    /// Support ticket system.
    Support,
}

impl fmt::Display for CustomerFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Support => f.write_str("support"),
        }
    }
}

/// Entitlement checks performed before a customer script runs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeatureEntitlements: Send + Sync {
    /// Whether `user_id` may use `feature`.
    async fn has_feature(&self, user_id: UserId, feature: CustomerFeature) -> Result<bool, Error>;
}

/// Grants every feature to everyone.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFeatureEntitlements;

#[async_trait]
impl FeatureEntitlements for FixtureFeatureEntitlements {
    async fn has_feature(
        &self,
        _user_id: UserId,
        _feature: CustomerFeature,
    ) -> Result<bool, Error> {
        Ok(true)
    }
}
