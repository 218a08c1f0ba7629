use crate::domain::{Category, Facility};

pub fn facility(id: &str, category: Category, lat: f64, lng: f64) -> Facility {
    Facility {
        id: id.to_string(),
        name: format!("Facility {id}"),
        category,
        lat,
        lng,
        address: String::new(),
        note: String::new(),
    }
}
