use crate::planner::constants::SEARCH_BASE_URL;

/// Reduce an item name to a plain lowercase search phrase.
///
/// Anything other than ASCII letters, digits and spaces becomes a space, and
/// runs of whitespace collapse to one.
pub fn clean_query(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    replaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Form-encode a value (spaces as `+`).
fn encode_plus(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

/// Shopping-site search link for an item.
pub fn search_url(name: &str, campaign: &str) -> String {
    format!(
        "{}?k={}&utm_campaign={}",
        SEARCH_BASE_URL,
        encode_plus(&clean_query(name)),
        encode_plus(campaign)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_query() {
        assert_eq!(clean_query("Greek Yogurt (2%) — Vanilla"), "greek yogurt 2 vanilla");
        assert_eq!(clean_query("  Tuna,  Pouch "), "tuna pouch");
        assert_eq!(clean_query("!!!"), "");
    }

    #[test]
    fn test_search_url() {
        assert_eq!(
            search_url("Chicken Breast Strips", "corporate-cut"),
            "https://www.instacart.com/store/s?k=chicken+breast+strips&utm_campaign=corporate-cut"
        );
    }

    #[test]
    fn test_search_url_is_deterministic() {
        assert_eq!(search_url("Oats", "x y"), search_url("Oats", "x y"));
        assert!(search_url("Oats", "x y").ends_with("utm_campaign=x+y"));
    }
}
