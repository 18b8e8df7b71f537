use std::collections::HashSet;

/// Prefix for labels whose first usable character is a digit.
pub const DIGIT_PREFIX: &str = "Component";

/// Turns an arbitrary layer label into a component identifier.
///
/// Drops every character that is not an ASCII letter or digit, prefixes
/// [`DIGIT_PREFIX`] when the result starts with a digit, and uppercases the
/// first character. A label with nothing usable becomes `Component`.
///
/// # Examples
///
/// ```
/// use tailframe_core::sanitize_component_name;
///
/// assert_eq!(sanitize_component_name("login screen"), "Loginscreen");
/// assert_eq!(sanitize_component_name("404 / Not found"), "Component404Notfound");
/// assert_eq!(sanitize_component_name("🎨"), "Component");
/// ```
pub fn sanitize_component_name(label: &str) -> String {
    let stripped: String = label.chars().filter(char::is_ascii_alphanumeric).collect();

    let mut name = match stripped.chars().next() {
        None => return DIGIT_PREFIX.to_string(),
        Some(first) if first.is_ascii_digit() => format!("{DIGIT_PREFIX}{stripped}"),
        Some(_) => stripped,
    };

    // first char is ASCII here, so the byte range is a char boundary
    name[..1].make_ascii_uppercase();
    name
}

/// Hands out sanitized names that are unique within one run.
///
/// The first use of a name keeps it as is; later collisions get a numeric
/// suffix starting at 2 (`Card`, `Card2`, `Card3`).
#[derive(Debug, Default)]
pub struct ComponentNamer {
    taken: HashSet<String>,
}

impl ComponentNamer {
    /// Creates an empty namer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitizes `label` and makes it unique.
    pub fn next_name(&mut self, label: &str) -> String {
        let base = sanitize_component_name(label);
        let mut candidate = base.clone();
        let mut suffix = 1;
        while self.taken.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}{suffix}");
        }
        self.taken.insert(candidate.clone());
        candidate
    }

    /// Marks a name as used so generated names avoid it.
    pub fn reserve(&mut self, name: &str) {
        self.taken.insert(name.to_string());
    }
}
