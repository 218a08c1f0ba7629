use crate::domain::{Category, Facility};
use crate::flows::FlowError;
use crate::model::MapModel;

pub const PLACEHOLDER_ADDRESS: &str = "Address not set";
pub const PLACEHOLDER_NOTE: &str = "Added on map";

/// Fields of the add-facility dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFacilityForm {
    pub name: String,
    pub category_index: usize,
}

impl AddFacilityForm {
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            category_index: 0,
        }
    }

    pub const fn category(&self) -> Option<Category> {
        Category::from_index(self.category_index)
    }

    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % Category::ALL.len();
    }

    pub fn prev_category(&mut self) {
        self.category_index =
            (self.category_index + Category::ALL.len() - 1) % Category::ALL.len();
    }
}

/// Create a facility at the current map centre and redraw its category.
///
/// An empty name is rejected and leaves the store untouched; the caller keeps
/// the dialog open in that case. Returns the new facility's id.
pub fn submit(model: &mut MapModel, form: &AddFacilityForm) -> Result<String, FlowError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(FlowError::EmptyName);
    }
    let category = form
        .category()
        .ok_or(FlowError::UnknownCategory(form.category_index))?;

    let center = model.viewport.center();
    let id = model.store.generate_id();
    model.store.push(Facility {
        id: id.clone(),
        name: name.to_string(),
        category,
        lat: center.lat,
        lng: center.lng,
        address: PLACEHOLDER_ADDRESS.to_string(),
        note: PLACEHOLDER_NOTE.to_string(),
    });
    model.render(category);

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{LatLng, RenderTarget, Viewport};
    use crate::store::FacilityStore;
    use crate::test_support::facility;

    fn model() -> MapModel {
        MapModel::new(
            FacilityStore::from_facilities(vec![facility("E1", Category::Elementary, 43.1, 141.3)]),
            Viewport::new(LatLng::new(43.09, 141.36), 4000.0),
        )
    }

    #[test]
    fn adds_at_the_map_center() {
        let mut model = model();
        let form = AddFacilityForm {
            name: "  Kita 24 AEON ".to_string(),
            category_index: Category::Aeon.index(),
        };
        let id = submit(&mut model, &form).unwrap();

        assert_eq!(model.store.len(), 2);
        let added = model.store.get(&id).unwrap();
        assert_eq!(added.name, "Kita 24 AEON");
        assert_eq!(added.category, Category::Aeon);
        assert_eq!(added.position(), model.viewport.center());
        assert_eq!(added.address, PLACEHOLDER_ADDRESS);
        assert_eq!(added.note, PLACEHOLDER_NOTE);

        let layer = &model.categories.get(Category::Aeon).layer;
        assert!(layer.marker_for(&id).is_some());
        assert_eq!(layer.circles().len(), 1);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut model = model();
        let form = AddFacilityForm {
            name: "   ".to_string(),
            category_index: 0,
        };
        assert_eq!(submit(&mut model, &form), Err(FlowError::EmptyName));
        assert_eq!(model.store.len(), 1);
        assert!(model.categories.get(Category::Subway).layer.is_empty());
    }

    #[test]
    fn ids_stay_unique_for_rapid_adds() {
        let mut model = model();
        let form = AddFacilityForm {
            name: "School".to_string(),
            category_index: Category::Elementary.index(),
        };
        let a = submit(&mut model, &form).unwrap();
        let b = submit(&mut model, &form).unwrap();
        assert_ne!(a, b);
        assert_eq!(model.categories.get(Category::Elementary).layer.markers().len(), 3);
    }

    #[test]
    fn category_selection_wraps() {
        let mut form = AddFacilityForm::new();
        form.prev_category();
        assert_eq!(form.category(), Some(Category::Elementary));
        form.next_category();
        assert_eq!(form.category(), Some(Category::Subway));
    }
}
