/// Longest label, in characters, that fits beside a city's icon.
const MAX_LABEL_CHARS: usize = 12;

/// Shortens a city name to fit on the map: everything from the first `-`, `;`,
/// `/`, `\` or `,` onwards is dropped, then the rest is capped at 12 characters.
///
/// # Examples
///
/// ```
/// use regional_forecast::format_city_name;
///
/// assert_eq!(format_city_name("Winston-Salem"), "Winston");
/// assert_eq!(format_city_name("Saint Paul/Mpls"), "Saint Paul");
/// ```
pub fn format_city_name(name: &str) -> String {
    let head = name
        .split(['-', ';', '/', '\\', ','])
        .next()
        .unwrap_or_default();
    head.chars().take(MAX_LABEL_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_at_punctuation() {
        assert_eq!(format_city_name("Winston-Salem"), "Winston");
        assert_eq!(format_city_name("Saint Paul/Mpls"), "Saint Paul");
        assert_eq!(format_city_name("Raleigh;Durham"), "Raleigh");
        assert_eq!(format_city_name("Dallas\\Fort Worth"), "Dallas");
        assert_eq!(format_city_name("Portland, OR"), "Portland");
    }

    #[test]
    fn test_caps_length() {
        let name = "Abcdefghijklmnopqrst";
        assert_eq!(name.chars().count(), 20);
        assert_eq!(format_city_name(name), "Abcdefghijkl");
        assert_eq!(format_city_name("Albuquerque"), "Albuquerque");
    }

    #[test]
    fn test_caps_by_characters_not_bytes() {
        assert_eq!(format_city_name("Mayagüez Puerto Rico"), "Mayagüez Pue");
    }

    #[test]
    fn test_leading_punctuation_yields_empty() {
        assert_eq!(format_city_name("-Nowhere"), "");
        assert_eq!(format_city_name(""), "");
    }
}
