use crate::domain::{Category, Facility};
use crate::map::LatLng;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::path::Path;

/// Ordered in-memory collection of facilities. The single source of truth for facility data.
#[derive(Debug, Default, Clone)]
pub struct FacilityStore {
    facilities: Vec<Facility>,
}

impl FacilityStore {
    pub const fn new() -> Self {
        Self {
            facilities: Vec::new(),
        }
    }

    pub const fn from_facilities(facilities: Vec<Facility>) -> Self {
        Self { facilities }
    }

    /// Load a JSON array of facility records.
    pub fn load_json(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read facility data {}", path.display()))?;
        let facilities: Vec<Facility> = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("Invalid facility data in {}", path.display()))?;

        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = facilities.iter().find(|f| !seen.insert(f.id.as_str())) {
            return Err(eyre!("Duplicate facility id in {}: {}", path.display(), dup.id));
        }

        tracing::info!(count = facilities.len(), path = %path.display(), "loaded facility data");
        Ok(Self { facilities })
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    pub fn all(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn get(&self, id: &str) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.id == id)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Facility> {
        self.facilities.iter().filter(move |f| f.category == category)
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.in_category(category).count()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn push(&mut self, facility: Facility) {
        tracing::info!(id = %facility.id, category = facility.category.as_str(), "facility added");
        self.facilities.push(facility);
    }

    /// Remove the first record with `id`.
    pub fn remove_first(&mut self, id: &str) -> Option<Facility> {
        let index = self.facilities.iter().position(|f| f.id == id)?;
        let removed = self.facilities.remove(index);
        tracing::info!(id = %removed.id, "facility removed");
        Some(removed)
    }

    /// Overwrite a facility's coordinates. Returns false if the id is unknown.
    pub fn move_to(&mut self, id: &str, position: LatLng) -> bool {
        match self.facilities.iter_mut().find(|f| f.id == id) {
            Some(facility) => {
                facility.lat = position.lat;
                facility.lng = position.lng;
                tracing::info!(id, lat = position.lat, lng = position.lng, "facility moved");
                true
            }
            None => false,
        }
    }

    /// Time based id, bumped until it is unused.
    pub fn generate_id(&self) -> String {
        let mut millis = chrono::Utc::now().timestamp_millis();
        loop {
            let id = format!("F{millis}");
            if !self.contains_id(&id) {
                return id;
            }
            millis += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::facility;

    #[test]
    fn remove_first_only_takes_one_match() {
        let mut store = FacilityStore::from_facilities(vec![
            facility("A", Category::Aeon, 43.0, 141.0),
            facility("A", Category::Tsuruha, 43.1, 141.1),
        ]);
        let removed = store.remove_first("A").unwrap();
        assert_eq!(removed.category, Category::Aeon);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].category, Category::Tsuruha);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut store = FacilityStore::from_facilities(vec![facility("A", Category::Aeon, 43.0, 141.0)]);
        assert!(store.remove_first("missing").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn move_to_updates_only_the_target() {
        let mut store = FacilityStore::from_facilities(vec![
            facility("A", Category::Aeon, 43.0, 141.0),
            facility("B", Category::Aeon, 43.2, 141.2),
        ]);
        assert!(store.move_to("A", LatLng::new(43.5, 141.5)));
        assert_eq!(store.get("A").map(|f| (f.lat, f.lng)), Some((43.5, 141.5)));
        assert_eq!(store.get("B").map(|f| (f.lat, f.lng)), Some((43.2, 141.2)));
        assert!(!store.move_to("C", LatLng::new(0.0, 0.0)));
    }

    #[test]
    fn generated_ids_skip_existing_ones() {
        let mut store = FacilityStore::new();
        let first = store.generate_id();
        assert!(first.starts_with('F'));
        store.push(facility(&first, Category::Subway, 43.0, 141.0));
        let second = store.generate_id();
        assert_ne!(first, second);
    }

    #[test]
    fn in_category_keeps_store_order() {
        let store = FacilityStore::from_facilities(vec![
            facility("S2", Category::Subway, 43.0, 141.0),
            facility("E1", Category::Elementary, 43.0, 141.0),
            facility("S1", Category::Subway, 43.0, 141.0),
        ]);
        let ids: Vec<_> = store.in_category(Category::Subway).map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["S2", "S1"]);
        assert_eq!(store.count_in(Category::Elementary), 1);
    }
}
