//! Delivery-zone check.
//!
//! This is the storefront's mocked coverage test: an address is "in range"
//! when any zone name appears verbatim (ignoring case) in the free-text
//! address. There is no geocoding and no normalization beyond case-folding.

/// Neighbourhoods of Dakar the bakery currently delivers to.
pub const DEFAULT_ZONES: [&str; 6] = [
    "Dakar Centre",
    "Almadies",
    "Plateau",
    "Mermoz",
    "Ouakam",
    "Ngor",
];

/// True iff any zone name is a case-insensitive substring of `address`.
pub fn is_in_zone(address: &str, zones: &[&str]) -> bool {
    let address = address.to_lowercase();
    zones.iter().any(|zone| address.contains(&zone.to_lowercase()))
}

/// [`is_in_zone`] against the bakery's [`DEFAULT_ZONES`].
pub fn in_default_zone(address: &str) -> bool {
    is_in_zone(address, &DEFAULT_ZONES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_name_inside_address_matches() {
        assert!(is_in_zone("123 Almadies Road", &["Almadies"]));
    }

    #[test]
    fn test_unrelated_address_does_not_match() {
        assert!(!is_in_zone("Elsewhere", &["Almadies"]));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(is_in_zone("12 rue de ouakam, dakar", &DEFAULT_ZONES));
        assert!(is_in_zone("PLATEAU, immeuble 4", &DEFAULT_ZONES));
    }

    #[test]
    fn test_empty_address_matches_nothing() {
        assert!(!in_default_zone(""));
    }
}
