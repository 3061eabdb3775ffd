//! Favorite link parameters.

use crate::server::model::catalog::CatalogKind;

/// Identifies one (user, catalog entity) favorite link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteParam {
    /// Id of the user owning the link.
    pub user_id: i32,
    /// Catalog table the link points into.
    pub kind: CatalogKind,
    /// Id of the catalog entity.
    pub entity_id: i32,
}

impl FavoriteParam {
    pub fn new(user_id: i32, kind: CatalogKind, entity_id: i32) -> Self {
        Self {
            user_id,
            kind,
            entity_id,
        }
    }
}
