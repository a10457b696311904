use super::data::{sample_plants, Plant, PlantId};

/// The Catalog owns the in-memory plant set.
/// It is built once when the screen mounts and never mutated afterwards.
pub struct Catalog {
    plants: Vec<Plant>,
}

impl Catalog {
    /// Create a catalog from the built-in sample data
    pub fn new() -> Self {
        let catalog = Self::from_plants(sample_plants());
        tracing::debug!("📚 Catalog loaded with {} plants", catalog.len());
        catalog
    }

    pub fn from_plants(plants: Vec<Plant>) -> Self {
        Catalog { plants }
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|plant| plant.id == id)
    }

    /// Plants whose name contains `query`, ignoring case, in catalog order
    pub fn filter(&self, query: &str) -> Vec<&Plant> {
        filter_by_name(&self.plants, query)
    }
}

/// Case-insensitive substring match on the plant name.
/// An empty query keeps every plant.
pub fn filter_by_name<'a>(plants: &'a [Plant], query: &str) -> Vec<&'a Plant> {
    let needle = query.to_lowercase();
    plants
        .iter()
        .filter(|plant| plant.name.to_lowercase().contains(&needle))
        .collect()
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("plants", &self.plants.len())
            .finish()
    }
}
