use crate::domain::{Category, Facility};
use crate::store::FacilityStore;
use std::fmt::Write;

/// Render the whole store as category-grouped, copy-pasteable source text.
///
/// Groups follow `Category::ALL` and skip empty categories. Facilities keep
/// store order within their group. Coordinates carry exactly six decimals.
pub fn export_text(store: &FacilityStore) -> String {
    let mut out = String::from("const facilities = [\n");
    let mut first_group = true;

    for category in Category::ALL {
        let mut facilities = store.in_category(category).peekable();
        if facilities.peek().is_none() {
            continue;
        }
        if !first_group {
            out.push('\n');
        }
        first_group = false;

        let _ = writeln!(out, "  // {}: {}", category.as_str(), category.label());
        for facility in facilities {
            out.push_str("  ");
            out.push_str(&facility_line(facility));
            out.push_str(",\n");
        }
    }

    out.push_str("];\n");
    out
}

/// Pretty JSON array of every facility, in store order.
pub fn export_json(store: &FacilityStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(store.all())
}

fn facility_line(facility: &Facility) -> String {
    format!(
        "{{ id: '{}', name: '{}', category: '{}', lat: {:.6}, lng: {:.6}, address: '{}', note: '{}' }}",
        quote(&facility.id),
        quote(&facility.name),
        facility.category.as_str(),
        facility.lat,
        facility.lng,
        quote(&facility.address),
        quote(&facility.note),
    )
}

fn quote(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::facility;
    use pretty_assertions::assert_eq;

    #[test]
    fn rounds_coordinates_to_six_decimals() {
        let mut h01 = facility("H01", Category::Subway, 43.091_234_567, 141.381_234_567);
        h01.name = "Kita 24-jo".to_string();
        let text = export_text(&FacilityStore::from_facilities(vec![h01]));
        assert!(text.contains("lat: 43.091235, lng: 141.381235"), "{text}");
    }

    #[test]
    fn pads_short_coordinates_to_six_decimals() {
        let store = FacilityStore::from_facilities(vec![facility("A1", Category::Aeon, 43.1, 141.0)]);
        assert!(export_text(&store).contains("lat: 43.100000, lng: 141.000000"));
    }

    #[test]
    fn groups_follow_the_fixed_category_order() {
        let store = FacilityStore::from_facilities(vec![
            facility("E1", Category::Elementary, 43.0, 141.0),
            facility("T1", Category::Tsuruha, 43.0, 141.0),
            facility("S1", Category::Subway, 43.0, 141.0),
            facility("J1", Category::JuniorHigh, 43.0, 141.0),
            facility("M1", Category::Maxvalu, 43.0, 141.0),
            facility("A1", Category::Aeon, 43.0, 141.0),
            facility("S2", Category::Subway, 43.0, 141.0),
        ]);
        let text = export_text(&store);
        let headers: Vec<&str> = text
            .lines()
            .filter_map(|line| line.trim().strip_prefix("// "))
            .map(|header| header.split(':').next().unwrap_or_default())
            .collect();
        assert_eq!(
            headers,
            vec!["subway", "aeon", "maxvalu", "tsuruha", "junior_high", "elementary"]
        );

        let s1 = text.find("id: 'S1'").unwrap();
        let s2 = text.find("id: 'S2'").unwrap();
        let a1 = text.find("id: 'A1'").unwrap();
        assert!(s1 < s2 && s2 < a1);
    }

    #[test]
    fn full_output_layout() {
        let mut s = facility("H01", Category::Subway, 43.090_6, 141.345_3);
        s.name = "Kita 24-jo".to_string();
        s.address = "Kita 24 Nishi 4".to_string();
        let mut e = facility("E01", Category::Elementary, 43.1, 141.34);
        e.name = "O'Hara Elementary".to_string();
        let text = export_text(&FacilityStore::from_facilities(vec![e, s]));

        assert_eq!(
            text,
            "const facilities = [\n\
             \x20 // subway: Subway stations\n\
             \x20 { id: 'H01', name: 'Kita 24-jo', category: 'subway', lat: 43.090600, lng: 141.345300, address: 'Kita 24 Nishi 4', note: '' },\n\
             \n\
             \x20 // elementary: Elementary schools\n\
             \x20 { id: 'E01', name: 'O\\'Hara Elementary', category: 'elementary', lat: 43.100000, lng: 141.340000, address: '', note: '' },\n\
             ];\n"
        );
    }

    #[test]
    fn empty_store_exports_an_empty_array() {
        assert_eq!(export_text(&FacilityStore::new()), "const facilities = [\n];\n");
    }

    #[test]
    fn json_export_keeps_record_shape() {
        let store = FacilityStore::from_facilities(vec![facility("J1", Category::JuniorHigh, 43.0, 141.0)]);
        let json = export_json(&store).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["category"], "junior_high");
        assert_eq!(value[0]["id"], "J1");
    }
}
