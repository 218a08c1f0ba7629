// Built-in facility list used when no data file is configured.

use crate::domain::{Category, Facility};
use crate::map::LatLng;
use crate::store::FacilityStore;

pub const WARD_CENTER: LatLng = LatLng::new(43.0905, 141.3720);

const SEED: &[(&str, &str, Category, f64, f64, &str, &str)] = &[
    ("H01", "Sakaemachi Station", Category::Subway, 43.111_600, 141.369_500, "Kita 41-jo Higashi 15", "Toho line terminus"),
    ("H02", "Shindo-Higashi Station", Category::Subway, 43.104_000, 141.375_700, "Kita 34-jo Higashi 15", ""),
    ("H03", "Motomachi Station", Category::Subway, 43.095_300, 141.380_200, "Kita 24-jo Higashi 16", ""),
    ("H04", "Kanjo-dori-Higashi Station", Category::Subway, 43.087_100, 141.374_500, "Kita 16-jo Higashi 16", "Bus terminal"),
    ("H05", "Higashi-Kuyakusho-mae Station", Category::Subway, 43.076_800, 141.364_700, "Kita 11-jo Higashi 7", "Ward office"),
    ("A01", "AEON Motomachi", Category::Aeon, 43.097_200, 141.384_900, "Kita 26-jo Higashi 17", "Open until 22:00"),
    ("A02", "AEON Naebo", Category::Aeon, 43.068_400, 141.389_700, "Higashi-Naebo 2-jo 3", ""),
    ("M01", "MaxValu Kita 24-jo", Category::Maxvalu, 43.091_800, 141.366_200, "Kita 24-jo Higashi 3", "24 hours"),
    ("M02", "MaxValu Higashi 8-chome", Category::Maxvalu, 43.083_500, 141.358_900, "Kita 19-jo Higashi 8", ""),
    ("T01", "Tsuruha Drug Motomachi", Category::Tsuruha, 43.094_100, 141.378_300, "Kita 23-jo Higashi 15", "Pharmacy counter"),
    ("T02", "Tsuruha Drug Sakaemachi", Category::Tsuruha, 43.110_300, 141.372_100, "Kita 40-jo Higashi 16", ""),
    ("T03", "Tsuruha Drug Kanjo-dori", Category::Tsuruha, 43.086_400, 141.372_800, "Kita 15-jo Higashi 15", ""),
    ("J01", "Motomachi Junior High School", Category::JuniorHigh, 43.098_700, 141.374_000, "Kita 27-jo Higashi 14", ""),
    ("J02", "Higashi Junior High School", Category::JuniorHigh, 43.080_200, 141.369_400, "Kita 14-jo Higashi 11", ""),
    ("E01", "Motomachi Elementary School", Category::Elementary, 43.093_600, 141.383_400, "Kita 23-jo Higashi 18", ""),
    ("E02", "Sakae-Minami Elementary School", Category::Elementary, 43.106_900, 141.365_800, "Kita 36-jo Higashi 12", ""),
    ("E03", "Kita 15-jo Elementary School", Category::Elementary, 43.084_900, 141.362_300, "Kita 15-jo Higashi 7", "Evacuation site"),
];

pub fn seed_facilities() -> Vec<Facility> {
    SEED.iter()
        .map(|&(id, name, category, lat, lng, address, note)| Facility {
            id: id.to_string(),
            name: name.to_string(),
            category,
            lat,
            lng,
            address: address.to_string(),
            note: note.to_string(),
        })
        .collect()
}

pub fn seed_store() -> FacilityStore {
    FacilityStore::from_facilities(seed_facilities())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let facilities = seed_facilities();
        let ids: HashSet<_> = facilities.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), facilities.len());
    }

    #[test]
    fn seed_covers_every_category() {
        let store = seed_store();
        for category in Category::ALL {
            assert!(store.count_in(category) > 0, "{category:?}");
        }
    }
}
