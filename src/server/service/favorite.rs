//! Favorite service for adding and removing favorite links.
//!
//! Both operations run in a single transaction: the user and catalog entity are
//! resolved, the link is checked, and the write happens before commit. Any failure
//! rolls the transaction back before the error is returned.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{catalog::CatalogRepository, favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
    model::{catalog::CatalogItem, favorite::FavoriteParam},
    util::transaction,
};

pub struct FavoriteService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a catalog entity to a user's favorites.
    ///
    /// # Arguments
    /// - `param` - User, catalog kind and entity id of the link
    ///
    /// # Returns
    /// - `Ok(CatalogItem)` - The favorited entity
    /// - `Err(AppError::NotFound)` - User or entity does not exist
    /// - `Err(AppError::Conflict)` - The link already exists
    /// - `Err(AppError::DbErr)` - Database error during query, insert or commit
    pub async fn add(&self, param: FavoriteParam) -> Result<CatalogItem, AppError> {
        let txn = self.db.begin().await?;

        let result = async {
            let item = resolve(&txn, &param).await?;
            let favorite_repo = FavoriteRepository::new(&txn);

            let conflict = format!("{} is already a favorite of this user", param.kind.title());
            if favorite_repo.exists(&param).await? {
                return Err(AppError::Conflict(conflict));
            }

            favorite_repo
                .create(&param)
                .await
                .map_err(|e| AppError::conflict_on_unique(e, &conflict))?;

            Ok(item)
        }
        .await;

        let item = transaction::finish(txn, result).await?;
        tracing::info!(
            "User {} added favorite {} {}",
            param.user_id,
            item.kind(),
            param.entity_id
        );

        Ok(item)
    }

    /// Removes a catalog entity from a user's favorites.
    ///
    /// # Arguments
    /// - `param` - User, catalog kind and entity id of the link
    ///
    /// # Returns
    /// - `Ok(())` - Link deleted
    /// - `Err(AppError::NotFound)` - User, entity or link does not exist
    /// - `Err(AppError::DbErr)` - Database error during query, delete or commit
    pub async fn remove(&self, param: FavoriteParam) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let result = async {
            resolve(&txn, &param).await?;

            let deleted = FavoriteRepository::new(&txn).delete(&param).await?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!(
                    "Favorite {} not found for this user",
                    param.kind
                )));
            }

            Ok(())
        }
        .await;

        transaction::finish(txn, result).await?;
        tracing::info!(
            "User {} removed favorite {} {}",
            param.user_id,
            param.kind,
            param.entity_id
        );

        Ok(())
    }
}

/// Ensures both ends of the link exist, returning the catalog entity.
async fn resolve<C: ConnectionTrait>(
    db: &C,
    param: &FavoriteParam,
) -> Result<CatalogItem, AppError> {
    if UserRepository::new(db).find_by_id(param.user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    CatalogRepository::new(db)
        .find(param.kind, param.entity_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", param.kind.title())))
}
