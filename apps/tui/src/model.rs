use crate::category::CategoryStates;
use crate::domain::Category;
use crate::map::{LatLng, Viewport};
use crate::render::{render_all, render_category};
use crate::store::FacilityStore;

/// Application data shared by the renderer and every event handler.
#[derive(Debug, Clone)]
pub struct MapModel {
    pub store: FacilityStore,
    pub categories: CategoryStates,
    pub viewport: Viewport,
}

impl MapModel {
    /// Build the model and draw every category once.
    pub fn new(store: FacilityStore, viewport: Viewport) -> Self {
        let mut model = Self {
            store,
            categories: CategoryStates::new(),
            viewport,
        };
        render_all(&model.store, &mut model.categories);
        model
    }

    pub fn render(&mut self, category: Category) {
        render_category(&self.store, &mut self.categories, category);
    }

    /// Write a dropped marker's position back to its facility and redraw its category.
    /// There is no undo.
    pub fn finish_drag(&mut self, facility_id: &str, position: LatLng) -> bool {
        let Some(category) = self.store.get(facility_id).map(|f| f.category) else {
            tracing::warn!(facility_id, "drag finished on unknown facility");
            return false;
        };
        self.store.move_to(facility_id, position);
        self.render(category);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::RenderTarget;
    use crate::test_support::facility;

    fn model() -> MapModel {
        MapModel::new(
            FacilityStore::from_facilities(vec![
                facility("T1", Category::Tsuruha, 43.08, 141.35),
                facility("T2", Category::Tsuruha, 43.09, 141.36),
                facility("J1", Category::JuniorHigh, 43.10, 141.37),
            ]),
            Viewport::new(LatLng::new(43.09, 141.36), 4000.0),
        )
    }

    #[test]
    fn new_renders_every_category() {
        let model = model();
        assert_eq!(model.categories.get(Category::Tsuruha).layer.markers().len(), 2);
        assert_eq!(model.categories.get(Category::JuniorHigh).layer.markers().len(), 1);
        assert!(model.categories.get(Category::Subway).layer.is_empty());
    }

    #[test]
    fn drag_updates_only_the_dragged_facility() {
        let mut model = model();
        let target = LatLng::new(43.1234, 141.4321);
        assert!(model.finish_drag("T1", target));

        let moved = model.store.get("T1").unwrap();
        assert_eq!((moved.lat, moved.lng), (43.1234, 141.4321));
        let other = model.store.get("T2").unwrap();
        assert_eq!((other.lat, other.lng), (43.09, 141.36));
        let school = model.store.get("J1").unwrap();
        assert_eq!((school.lat, school.lng), (43.10, 141.37));

        let marker = model
            .categories
            .get(Category::Tsuruha)
            .layer
            .marker_for("T1")
            .unwrap();
        assert_eq!(marker.position, target);
    }

    #[test]
    fn drag_of_unknown_facility_changes_nothing() {
        let mut model = model();
        let before = model.store.all().to_vec();
        assert!(!model.finish_drag("nope", LatLng::new(0.0, 0.0)));
        assert_eq!(model.store.all(), before.as_slice());
    }
}
