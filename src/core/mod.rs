/// Crop lookups, harvest-date search and crop/fertilizer associations
pub mod crop;
/// Farm records and the crops planted on them
pub mod farm;
/// Fertilizer records
pub mod fertilizer;
