use crate::domain::Facility;
use crate::modal::{ModalAction, ModalHost};
use crate::model::MapModel;

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(Facility),
    /// Stale id. Reported as a notice, never as an error.
    NotFound,
}

/// Ask for confirmation before deleting `facility_id`.
pub fn request(model: &MapModel, modal: &mut ModalHost, facility_id: &str) {
    let body = model.store.get(facility_id).map_or_else(
        || format!("Delete facility {facility_id}?"),
        |f| format!("Delete \"{}\" ({})?", f.name, f.category.label()),
    );
    modal.show(
        "Delete facility",
        body,
        ModalAction::DeleteFacility(facility_id.to_string()),
        true,
    );
}

/// Remove the first record with `facility_id` and redraw its category.
pub fn confirm(model: &mut MapModel, facility_id: &str) -> DeleteOutcome {
    match model.store.remove_first(facility_id) {
        Some(removed) => {
            model.render(removed.category);
            DeleteOutcome::Deleted(removed)
        }
        None => {
            tracing::info!(facility_id, "delete requested for missing facility");
            DeleteOutcome::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::map::{LatLng, RenderTarget, Viewport};
    use crate::store::FacilityStore;
    use crate::test_support::facility;

    fn model() -> MapModel {
        MapModel::new(
            FacilityStore::from_facilities(vec![
                facility("J1", Category::JuniorHigh, 43.08, 141.35),
                facility("J2", Category::JuniorHigh, 43.09, 141.36),
                facility("J1", Category::JuniorHigh, 43.10, 141.37),
            ]),
            Viewport::new(LatLng::new(43.09, 141.36), 4000.0),
        )
    }

    #[test]
    fn request_opens_a_cancellable_confirmation() {
        let model = model();
        let mut modal = ModalHost::new();
        request(&model, &mut modal, "J2");
        let open = modal.current().unwrap();
        assert!(open.show_cancel);
        assert_eq!(open.on_confirm, ModalAction::DeleteFacility("J2".to_string()));
        assert!(open.body.contains("Facility J2"));
        assert_eq!(model.store.len(), 3);
    }

    #[test]
    fn confirm_removes_first_match_and_redraws() {
        let mut model = model();
        let outcome = confirm(&mut model, "J1");
        let DeleteOutcome::Deleted(removed) = outcome else {
            panic!("expected a deletion");
        };
        assert!((removed.lat - 43.08).abs() < f64::EPSILON);
        assert_eq!(model.store.len(), 2);
        assert_eq!(
            model.categories.get(Category::JuniorHigh).layer.markers().len(),
            2
        );
    }

    #[test]
    fn stale_id_is_a_soft_not_found() {
        let mut model = model();
        assert_eq!(confirm(&mut model, "gone"), DeleteOutcome::NotFound);
        assert_eq!(model.store.len(), 3);
    }
}
