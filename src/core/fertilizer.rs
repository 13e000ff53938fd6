//! Fertilizer business logic.

use crate::{
    entities::{Fertilizer, fertilizer},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::debug;

/// Persists a new fertilizer and returns it with its assigned ID.
pub async fn insert_fertilizer(
    db: &DatabaseConnection,
    name: String,
    brand: String,
    composition: String,
) -> Result<fertilizer::Model> {
    let fertilizer = fertilizer::ActiveModel {
        name: Set(name),
        brand: Set(brand),
        composition: Set(composition),
        ..Default::default()
    };

    let result = fertilizer.insert(db).await?;
    debug!(fertilizer_id = result.id, "Inserted fertilizer");
    Ok(result)
}

/// Finds a fertilizer by its unique ID.
pub async fn get_fertilizer_by_id(
    db: &DatabaseConnection,
    fertilizer_id: i64,
) -> Result<Option<fertilizer::Model>> {
    Fertilizer::find_by_id(fertilizer_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every fertilizer, in insertion order.
pub async fn get_all_fertilizers(db: &DatabaseConnection) -> Result<Vec<fertilizer::Model>> {
    Fertilizer::find()
        .order_by_asc(fertilizer::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_insert_and_get_fertilizer() -> Result<()> {
        let db = setup_test_db().await?;

        let fertilizer = insert_fertilizer(
            &db,
            "Compost".to_string(),
            "Agrodiversity".to_string(),
            "Organic matter".to_string(),
        )
        .await?;
        assert_eq!(fertilizer.name, "Compost");
        assert_eq!(fertilizer.brand, "Agrodiversity");
        assert_eq!(fertilizer.composition, "Organic matter");

        let found = get_fertilizer_by_id(&db, fertilizer.id).await?;
        assert_eq!(found, Some(fertilizer));

        assert!(get_fertilizer_by_id(&db, 999).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_fertilizers() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_all_fertilizers(&db).await?.is_empty());

        let compost = create_test_fertilizer(&db, "Compost").await?;
        let nitrate = create_test_fertilizer(&db, "Nitrate").await?;

        assert_eq!(get_all_fertilizers(&db).await?, vec![compost, nitrate]);
        Ok(())
    }
}
