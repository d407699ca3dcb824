//! Field Office Coordinates
//! Static lookup from canonical field-office name to (latitude, longitude).

/// Known CBP field offices and their coordinates.
pub const FIELD_OFFICE_COORDS: &[(&str, f64, f64)] = &[
    ("San Diego Field Office", 32.7157, -117.1611),
    ("Laredo Field Office", 27.5306, -99.4803),
    ("El Paso Field Office", 31.7619, -106.4850),
    ("Tucson Field Office", 32.2226, -110.9747),
    ("New Orleans Field Office", 29.9511, -90.0715),
    ("Miami Field Office", 25.7617, -80.1918),
    ("Detroit Field Office", 42.3314, -83.0458),
    ("Chicago Field Office", 41.8781, -87.6298),
    ("Buffalo Field Office", 42.8864, -78.8784),
    ("Seattle Field Office", 47.6062, -122.3321),
    ("Boston Field Office", 42.3601, -71.0589),
    ("New York Field Office", 40.7128, -74.0060),
    ("Houston Field Office", 29.7604, -95.3698),
    ("Atlanta Field Office", 33.7490, -84.3880),
    ("Los Angeles Field Office", 34.0522, -118.2437),
    ("Baltimore Field Office", 39.2904, -76.6122),
    ("San Francisco Field Office", 37.7749, -122.4194),
];

/// Look up coordinates for a canonical field-office name.
/// Unknown names yield `None`, never an error.
pub fn lookup(area: &str) -> Option<(f64, f64)> {
    FIELD_OFFICE_COORDS
        .iter()
        .find(|(name, _, _)| *name == area)
        .map(|&(_, lat, lon)| (lat, lon))
}

/// Canonicalize an Area of Responsibility name: trim, collapse internal
/// whitespace, and title-case each word (first letter upper, rest lower).
pub fn canonical_area(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for (i, word) in raw.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut prev_alpha = false;
        for ch in word.chars() {
            if ch.is_alphabetic() {
                if prev_alpha {
                    out.extend(ch.to_lowercase());
                } else {
                    out.extend(ch.to_uppercase());
                }
                prev_alpha = true;
            } else {
                out.push(ch);
                prev_alpha = false;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_area_title_cases_words() {
        assert_eq!(
            canonical_area("SAN DIEGO FIELD OFFICE"),
            "San Diego Field Office"
        );
        assert_eq!(
            canonical_area("laredo field office"),
            "Laredo Field Office"
        );
    }

    #[test]
    fn canonical_area_collapses_spacing() {
        assert_eq!(
            canonical_area("  el   paso  field office "),
            "El Paso Field Office"
        );
    }

    #[test]
    fn lookup_known_office() {
        let (lat, lon) = lookup("San Diego Field Office").unwrap();
        assert_eq!(lat, 32.7157);
        assert_eq!(lon, -117.1611);
    }

    #[test]
    fn lookup_unknown_office_is_none() {
        assert_eq!(lookup("Anchorage Field Office"), None);
    }

    #[test]
    fn lookup_only_matches_canonical_form() {
        assert_eq!(lookup("SAN DIEGO FIELD OFFICE"), None);
        assert!(lookup(&canonical_area("SAN DIEGO FIELD OFFICE")).is_some());
    }
}
