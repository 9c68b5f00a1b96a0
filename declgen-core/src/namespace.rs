//! Namespace resolution for declaration names.
//!
//! A declaration name is an ordered list of path segments such as
//! `["koinos", "chain", "block"]`. These helpers turn it into its
//! fully-qualified display form and its enclosing namespace.

/// Token placed between namespace segments.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Join name segments into a fully-qualified name (e.g. `["a", "b"]` -> `"a::b"`).
///
/// Segments are joined verbatim: no case conversion, trimming or escaping.
pub fn fq_name<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(NAMESPACE_SEPARATOR)
}

/// Namespace enclosing a declaration name (e.g. `["a", "b", "Foo"]` -> `"a::b"`).
///
/// Top-level names (a single segment) have no enclosing namespace and
/// yield the empty string, as does an empty name.
pub fn enclosing_namespace<S: AsRef<str>>(segments: &[S]) -> String {
    match segments.split_last() {
        Some((_, parent)) if !parent.is_empty() => fq_name(parent),
        _ => String::new(),
    }
}

/// Namespace of an already-qualified name (e.g. `"a::b::Foo"` -> `"a::b"`).
pub fn namespace_of(fq_name: &str) -> String {
    fq_name
        .rsplit_once(NAMESPACE_SEPARATOR)
        .map(|(parent, _)| parent.to_string())
        .unwrap_or_default()
}

/// Last segment of an already-qualified name (e.g. `"a::b::Foo"` -> `"Foo"`).
pub fn local_name(fq_name: &str) -> &str {
    fq_name
        .rsplit_once(NAMESPACE_SEPARATOR)
        .map_or(fq_name, |(_, local)| local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fq_name() {
        assert_eq!(fq_name(&["a", "b", "Foo"]), "a::b::Foo");
        assert_eq!(fq_name(&["Foo"]), "Foo");
        assert_eq!(fq_name::<&str>(&[]), "");
    }

    #[test]
    fn test_fq_name_is_verbatim() {
        assert_eq!(fq_name(&["Mixed Case", " spaced "]), "Mixed Case:: spaced ");
    }

    #[test]
    fn test_enclosing_namespace() {
        assert_eq!(enclosing_namespace(&["a", "b", "Foo"]), "a::b");
        assert_eq!(enclosing_namespace(&["a", "Bar"]), "a");
        assert_eq!(enclosing_namespace(&["Top"]), "");
        assert_eq!(enclosing_namespace::<&str>(&[]), "");
    }

    #[test]
    fn test_enclosing_namespace_matches_parent_fq_name() {
        let names: [&[&str]; 4] = [
            &["x"],
            &["x", "y"],
            &["x", "y", "z"],
            &["koinos", "protocol", "block", "header"],
        ];

        for name in names {
            let expected = if name.len() > 1 {
                fq_name(&name[..name.len() - 1])
            } else {
                String::new()
            };
            assert_eq!(enclosing_namespace(name), expected, "name: {:?}", name);
        }
    }

    #[test]
    fn test_namespace_of() {
        assert_eq!(namespace_of("a::b::Foo"), "a::b");
        assert_eq!(namespace_of("a::Bar"), "a");
        assert_eq!(namespace_of("Top"), "");
        assert_eq!(namespace_of(""), "");
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("a::b::Foo"), "Foo");
        assert_eq!(local_name("Top"), "Top");
        assert_eq!(local_name(""), "");
    }

    #[test]
    fn test_namespace_of_agrees_with_segments() {
        let name = ["koinos", "chain", "Block"];
        assert_eq!(namespace_of(&fq_name(&name)), enclosing_namespace(&name));
    }
}
