//! Customer feature flags read from the `domain` table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::UserId;
use crate::domain::ports::{CustomerFeatureRepository, CustomerFeatureRepositoryError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::domain;

const SWITCH_ON: &str = "yes";

/// Diesel-backed customer feature lookup.
#[derive(Clone)]
pub struct DieselCustomerFeatureRepository {
    pool: DbPool,
}

impl DieselCustomerFeatureRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerFeatureRepository for DieselCustomerFeatureRepository {
    async fn support_enabled(
        &self,
        user_id: UserId,
    ) -> Result<bool, CustomerFeatureRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let switch: Option<String> = domain::table
            .filter(domain::domain_admin_id.eq(user_id.get()))
            .select(domain::domain_support)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(switch.as_deref() == Some(SWITCH_ON))
    }
}
