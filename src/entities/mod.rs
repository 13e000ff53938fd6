//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Relations are plain foreign-key and join-table columns; related records are
//! always loaded by query, never held as back-references.

pub mod crop;
pub mod crop_fertilizer;
pub mod farm;
pub mod fertilizer;

// Re-export specific types to avoid conflicts
pub use crop::{Column as CropColumn, Entity as Crop, Model as CropModel};
pub use crop_fertilizer::{
    Column as CropFertilizerColumn, Entity as CropFertilizer, Model as CropFertilizerModel,
};
pub use farm::{Column as FarmColumn, Entity as Farm, Model as FarmModel};
pub use fertilizer::{Column as FertilizerColumn, Entity as Fertilizer, Model as FertilizerModel};
