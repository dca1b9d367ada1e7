//! Mapping of freedesktop categories onto menu sections.

/// Section used when no listed category is known.
pub const OTHERS: &str = "Others";

/// Freedesktop category token -> menu section.
const XDG_CATEGORIES: &[(&str, &str)] = &[
    ("Audio", "Multimedia"),
    ("AudioVideo", "Multimedia"),
    ("Development", "Development"),
    ("Education", "Education"),
    ("Game", "Games"),
    ("Graphics", "Graphics"),
    ("Network", "Internet"),
    ("Office", "Office"),
    ("Others", OTHERS),
    ("Science", "Science"),
    ("Settings", "Settings"),
    ("System", "System"),
    ("Utility", "Accessories"),
    ("Video", "Multimedia"),
];

/// Menu section -> icon name shown on the section header.
const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("Accessories", "applications-accessories"),
    ("Development", "applications-development"),
    ("Education", "applications-education"),
    ("Games", "applications-games"),
    ("Graphics", "applications-graphics"),
    ("Internet", "applications-internet"),
    ("Multimedia", "applications-multimedia"),
    ("Office", "applications-office"),
    (OTHERS, "applications-other"),
    ("Science", "applications-science"),
    ("Settings", "preferences-desktop"),
    ("System", "applications-system"),
];

/// Fold a `Categories=` value into one menu section.
///
/// The last recognized token wins, so `Utility;Development;` lands in
/// Development.
pub fn classify(categories: &str) -> &'static str {
    categories
        .split(';')
        .filter_map(|token| {
            XDG_CATEGORIES
                .iter()
                .find(|(category, _)| *category == token)
                .map(|(_, name)| *name)
        })
        .last()
        .unwrap_or(OTHERS)
}

/// Icon name for a menu section.
pub fn category_icon(section: &str) -> Option<&'static str> {
    CATEGORY_ICONS
        .iter()
        .find(|(name, _)| *name == section)
        .map(|(_, icon)| *icon)
}
