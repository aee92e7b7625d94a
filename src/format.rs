pub const DEFAULT_LANGUAGE_COLOR: &str = "#374151";

// Badge colours for the most common languages
pub const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#eab308"),
    ("TypeScript", "#2563eb"),
    ("Python", "#16a34a"),
    ("Java", "#dc2626"),
    ("C#", "#9333ea"),
    ("PHP", "#4f46e5"),
    ("Go", "#0891b2"),
    ("Ruby", "#db2777"),
    ("Rust", "#ea580c"),
    ("Kotlin", "#d97706"),
    ("Swift", "#e11d48"),
    ("Dart", "#0d9488"),
    ("C", "#4b5563"),
    ("C++", "#1e40af"),
];

pub fn language_color(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

pub fn format_number(n: u32) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
