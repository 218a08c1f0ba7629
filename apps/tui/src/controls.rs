// Typed control actions for the per-category checkbox and radius slider.

use crate::category::RADIUS_SLIDER;
use crate::domain::Category;
use crate::model::MapModel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    SetVisible(Category, bool),
    ToggleVisible(Category),
    /// Applied as is, no range check.
    SetRadius(Category, f64),
    /// Moves the slider by whole steps, clamped to the slider range.
    StepRadius(Category, i32),
}

impl ControlAction {
    pub const fn category(self) -> Category {
        match self {
            Self::SetVisible(category, _)
            | Self::ToggleVisible(category)
            | Self::SetRadius(category, _)
            | Self::StepRadius(category, _) => category,
        }
    }
}

/// Apply a control change and redraw the affected category only.
pub fn dispatch(model: &mut MapModel, action: ControlAction) {
    let category = action.category();
    let config = model.categories.get_mut(category);

    match action {
        ControlAction::SetVisible(_, visible) => config.visible = visible,
        ControlAction::ToggleVisible(_) => config.visible = !config.visible,
        ControlAction::SetRadius(_, radius) => config.radius_m = radius,
        ControlAction::StepRadius(_, steps) => {
            let next = f64::from(steps).mul_add(RADIUS_SLIDER.step, config.radius_m);
            config.radius_m = RADIUS_SLIDER.clamp(next);
        }
    }

    tracing::debug!(?action, "control changed");
    model.render(category);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{LatLng, RenderTarget, Viewport};
    use crate::store::FacilityStore;
    use crate::test_support::facility;

    fn model() -> MapModel {
        MapModel::new(
            FacilityStore::from_facilities(vec![
                facility("M1", Category::Maxvalu, 43.08, 141.35),
                facility("E1", Category::Elementary, 43.09, 141.36),
            ]),
            Viewport::new(LatLng::new(43.09, 141.36), 4000.0),
        )
    }

    #[test]
    fn toggling_hides_and_shows_a_category() {
        let mut model = model();
        dispatch(&mut model, ControlAction::ToggleVisible(Category::Maxvalu));
        assert!(!model.categories.get(Category::Maxvalu).visible);
        assert!(model.categories.get(Category::Maxvalu).layer.is_empty());

        dispatch(&mut model, ControlAction::SetVisible(Category::Maxvalu, true));
        assert_eq!(model.categories.get(Category::Maxvalu).layer.markers().len(), 1);
    }

    #[test]
    fn set_radius_is_applied_unchecked_and_redrawn() {
        let mut model = model();
        dispatch(&mut model, ControlAction::SetRadius(Category::Elementary, 12.5));
        let config = model.categories.get(Category::Elementary);
        assert!((config.radius_m - 12.5).abs() < f64::EPSILON);
        assert!((config.layer.circles()[0].radius_m - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn step_radius_is_clamped_to_the_slider() {
        let mut model = model();
        dispatch(&mut model, ControlAction::StepRadius(Category::Maxvalu, 2));
        assert!((model.categories.get(Category::Maxvalu).radius_m - 1100.0).abs() < f64::EPSILON);
        dispatch(&mut model, ControlAction::StepRadius(Category::Maxvalu, -1000));
        assert!((model.categories.get(Category::Maxvalu).radius_m - RADIUS_SLIDER.min).abs() < f64::EPSILON);
    }

    #[test]
    fn other_categories_are_not_redrawn() {
        let mut model = model();
        model.store.remove_first("E1");
        dispatch(&mut model, ControlAction::ToggleVisible(Category::Maxvalu));
        // Elementary still shows the stale marker because only Maxvalu was redrawn.
        assert_eq!(model.categories.get(Category::Elementary).layer.markers().len(), 1);
    }
}
