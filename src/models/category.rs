/// Built-in categories of a fresh store, in display order.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Unterricht",
    "Vor-/Nachbereitung",
    "Korrekturen",
    "Konferenzen",
    "Pausenaufsicht",
    "Elternkontakte",
    "Fortbildung",
    "Sonstiges",
];

/// Used as timer default when the category list is empty.
pub const FALLBACK_CATEGORY: &str = "Sonstiges";

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Drop repeated names, keeping the first occurrence.
pub fn dedup_preserving_order(list: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(list.len());
    for c in list {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

pub fn first_or_fallback(list: &[String]) -> &str {
    list.first().map(String::as_str).unwrap_or(FALLBACK_CATEGORY)
}
