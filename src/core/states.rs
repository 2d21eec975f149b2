/// US states (plus DC) as `(name, postal code)` pairs
pub const US_STATES: [(&str, &str); 51] = [
    ("Alabama", "AL"), ("Alaska", "AK"), ("Arizona", "AZ"), ("Arkansas", "AR"),
    ("California", "CA"), ("Colorado", "CO"), ("Connecticut", "CT"), ("Delaware", "DE"),
    ("District of Columbia", "DC"), ("Florida", "FL"), ("Georgia", "GA"), ("Hawaii", "HI"),
    ("Idaho", "ID"), ("Illinois", "IL"), ("Indiana", "IN"), ("Iowa", "IA"),
    ("Kansas", "KS"), ("Kentucky", "KY"), ("Louisiana", "LA"), ("Maine", "ME"),
    ("Maryland", "MD"), ("Massachusetts", "MA"), ("Michigan", "MI"), ("Minnesota", "MN"),
    ("Mississippi", "MS"), ("Missouri", "MO"), ("Montana", "MT"), ("Nebraska", "NE"),
    ("Nevada", "NV"), ("New Hampshire", "NH"), ("New Jersey", "NJ"), ("New Mexico", "NM"),
    ("New York", "NY"), ("North Carolina", "NC"), ("North Dakota", "ND"), ("Ohio", "OH"),
    ("Oklahoma", "OK"), ("Oregon", "OR"), ("Pennsylvania", "PA"), ("Rhode Island", "RI"),
    ("South Carolina", "SC"), ("South Dakota", "SD"), ("Tennessee", "TN"), ("Texas", "TX"),
    ("Utah", "UT"), ("Vermont", "VT"), ("Virginia", "VA"), ("Washington", "WA"),
    ("West Virginia", "WV"), ("Wisconsin", "WI"), ("Wyoming", "WY"),
];

/// Resolve a state name or postal code to its canonical two-letter code
///
/// Matching is case-insensitive and ignores surrounding whitespace.
pub fn state_code(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    US_STATES
        .iter()
        .find(|(name, code)| name.eq_ignore_ascii_case(input) || code.eq_ignore_ascii_case(input))
        .map(|(_, code)| *code)
}

/// State names in display order, without DC
pub fn state_names() -> Vec<&'static str> {
    US_STATES
        .iter()
        .filter(|(_, code)| *code != "DC")
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_code_by_name() {
        assert_eq!(state_code("Iowa"), Some("IA"));
        assert_eq!(state_code("new york"), Some("NY"));
        assert_eq!(state_code("  West Virginia "), Some("WV"));
    }

    #[test]
    fn test_state_code_by_code() {
        assert_eq!(state_code("ia"), Some("IA"));
        assert_eq!(state_code("TX"), Some("TX"));
    }

    #[test]
    fn test_unknown_state() {
        assert_eq!(state_code(""), None);
        assert_eq!(state_code("Atlantis"), None);
    }

    #[test]
    fn test_state_names_excludes_dc() {
        let names = state_names();
        assert_eq!(names.len(), 50);
        assert!(!names.contains(&"District of Columbia"));
    }
}
