//! Naming-convention helpers for generated type text.

/// Converts a collection or field name to PascalCase, splitting on spaces,
/// underscores, and hyphens.
///
/// # Examples
///
/// ```
/// use directus_typegen_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("blog_articles"), "BlogArticles");
/// assert_eq!(to_pascal_case("front-page"), "FrontPage");
/// assert_eq!(to_pascal_case(""), "");
/// ```
pub fn to_pascal_case(raw: &str) -> String {
    raw.split([' ', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Naive English singularization: `articles` → `article`,
/// `categories` → `category`. Names not ending in a plural-looking `s` pass
/// through unchanged.
pub fn to_singular(raw: &str) -> String {
    if let Some(stem) = raw.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if raw.ends_with('s') && !raw.ends_with("ss") {
        return raw[..raw.len() - 1].to_string();
    }
    raw.to_string()
}

/// The generated type name for a collection: PascalCase of its singular
/// form (`blog_articles` → `BlogArticle`).
pub fn type_name_for(collection: &str) -> String {
    to_pascal_case(&to_singular(collection))
}

/// True when `name` can appear unquoted as a TypeScript object-type member.
pub fn is_valid_ts_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
}

/// Renders a member name, single-quoting it when it is not a valid
/// identifier (e.g. contains a hyphen).
pub fn member_name(name: &str) -> String {
    if is_valid_ts_identifier(name) {
        name.to_string()
    } else {
        format!("'{name}'")
    }
}
