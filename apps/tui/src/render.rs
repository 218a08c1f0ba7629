use crate::category::CategoryStates;
use crate::domain::{Category, Facility};
use crate::map::{Circle, Marker, MarkerPopup, RenderTarget, CIRCLE_FILL_OPACITY};
use crate::store::FacilityStore;

/// Clear a category's layer and redraw it from the store.
///
/// Hidden categories are left with an empty layer. Visible ones get one
/// circle and one draggable marker per facility.
pub fn render_category(store: &FacilityStore, categories: &mut CategoryStates, category: Category) {
    let config = categories.get_mut(category);
    let visible = config.visible;
    let radius_m = config.radius_m;
    let color = config.color.clone();

    draw_facilities(
        &mut config.layer,
        store.in_category(category),
        visible,
        radius_m,
        &color,
    );

    tracing::debug!(
        category = category.as_str(),
        visible,
        radius_m,
        markers = config.layer.markers().len(),
        "rendered category"
    );
}

pub fn render_all(store: &FacilityStore, categories: &mut CategoryStates) {
    for category in Category::ALL {
        render_category(store, categories, category);
    }
}

fn draw_facilities<'a, T: RenderTarget>(
    target: &mut T,
    facilities: impl Iterator<Item = &'a Facility>,
    visible: bool,
    radius_m: f64,
    color: &str,
) {
    target.clear();
    if !visible {
        return;
    }

    for facility in facilities {
        target.add_circle(Circle {
            center: facility.position(),
            radius_m,
            color: color.to_string(),
            fill_opacity: CIRCLE_FILL_OPACITY,
        });
        target.add_marker(Marker {
            facility_id: facility.id.clone(),
            position: facility.position(),
            color: color.to_string(),
            shape: facility.category.marker_shape(),
            draggable: true,
            popup: MarkerPopup {
                facility_id: facility.id.clone(),
                name: facility.name.clone(),
                address: facility.address.clone(),
                note: facility.note.clone(),
            },
        });
    }
}
