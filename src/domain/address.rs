// src/domain/address.rs

const SQFT_PER_ACRE: f64 = 43560.0;

/// Tokens rendered fully uppercase when re-titlecasing an address.
const UPPERCASE_TOKENS: [&str; 13] = [
    "fl", "st", "rd", "dr", "ave", "blvd", "ln", "pl", "ct", "n", "s", "e", "w",
];

/// Lot area in square feet. The listings feed labels some acre values
/// as "sqft": any positive value under 2 is treated as acres, since no
/// lot in the area is under 2 square feet but plenty are under 2 acres.
/// Legitimately tiny square-foot values are indistinguishable and get
/// rescaled too; that is accepted, documented behavior.
pub fn normalize_lot_area(value: f64, unit: &str) -> i64 {
    if unit == "acres" || (value > 0.0 && value < 2.0) {
        (value * SQFT_PER_ACRE).round() as i64
    } else {
        value.round() as i64
    }
}

/// Re-titlecase a lowercased address for display: direction and street
/// suffix tokens go fully uppercase, "saint" becomes "St.", ordinals
/// keep their digits with a lowercase suffix, everything else gets a
/// capital first letter.
pub fn capitalize_address(address: &str) -> String {
    address
        .split_whitespace()
        .map(capitalize_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_token(word: &str) -> String {
    let lower = word.to_lowercase();
    if UPPERCASE_TOKENS.contains(&lower.as_str()) {
        return word.to_uppercase();
    }
    if lower == "saint" {
        return "St.".to_string();
    }
    if let Some((digits, suffix)) = split_ordinal(&lower) {
        return format!("{digits}{suffix}");
    }
    capitalize_first(word)
}

/// "1st"/"22nd"/"103rd" style tokens: digits followed by an ordinal suffix.
fn split_ordinal(word: &str) -> Option<(&str, &str)> {
    if word.len() < 3 || !word.is_char_boundary(word.len() - 2) {
        return None;
    }
    let (head, tail) = word.split_at(word.len() - 2);
    let is_ordinal = head.chars().all(|c| c.is_ascii_digit())
        && matches!(tail, "th" | "st" | "nd" | "rd");
    is_ordinal.then_some((head, tail))
}

/// First character uppercased, the rest lowercased. The containment
/// report and stored record names use this plainer transform; only the
/// zoned report titlecases fully.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Coarse matching key: everything after the first comma dropped, then
/// the first three whitespace tokens joined with single spaces.
pub fn core_address(address: &str) -> String {
    address
        .split(',')
        .next()
        .unwrap_or(address)
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acres_always_convert() {
        assert_eq!(normalize_lot_area(0.25, "acres"), 10890);
        assert_eq!(normalize_lot_area(2.5, "acres"), 108900);
    }

    #[test]
    fn small_sqft_values_are_reinterpreted_as_acres() {
        assert_eq!(normalize_lot_area(1.5, "sqft"), 65340);
    }

    #[test]
    fn plausible_sqft_passes_through() {
        assert_eq!(normalize_lot_area(10000.0, "sqft"), 10000);
        assert_eq!(normalize_lot_area(0.0, "sqft"), 0);
    }

    #[test]
    fn suffix_tokens_go_uppercase() {
        assert_eq!(capitalize_address("123 main st"), "123 Main ST");
        assert_eq!(
            capitalize_address("4800 central ave n, st petersburg, fl"),
            "4800 Central AVE N, ST Petersburg, FL"
        );
    }

    #[test]
    fn ordinals_keep_digits_and_lowercase_suffix() {
        assert_eq!(capitalize_address("1st ave n"), "1st AVE N");
        assert_eq!(capitalize_address("22ND street"), "22nd Street");
    }

    #[test]
    fn saint_abbreviates() {
        assert_eq!(capitalize_address("saint petersburg"), "St. Petersburg");
    }

    #[test]
    fn capitalize_first_only_touches_the_first_letter() {
        assert_eq!(capitalize_first("123 main st, unit b"), "123 main st, unit b");
        assert_eq!(capitalize_first("main STREET"), "Main street");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn core_address_takes_three_tokens_before_comma() {
        assert_eq!(
            core_address("123 main st, st petersburg, fl"),
            "123 main st"
        );
        assert_eq!(core_address("55 5th ave n"), "55 5th ave");
        assert_eq!(core_address("9 oak"), "9 oak");
    }
}
