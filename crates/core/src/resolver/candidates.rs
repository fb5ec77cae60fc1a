//! Candidate-path builder.
//!
//! Turns a request descriptor into the ordered list of script identifiers
//! to probe, most specific first. Insertion order IS the priority; the
//! builder never deduplicates.

use bindery_api::{Method, ResourceType};

/// Methods whose candidates may omit the method token, so one script can
/// serve both safe verbs.
pub const DEFAULT_METHODS: [Method; 2] = [Method::GET, Method::HEAD];

/// Build the ordered candidate list for one resolution call.
///
/// Selector combinations are tried from most specific (all selectors) to
/// least (none); the final entries are the selector-free forms, where the
/// method-less variant falls back to the resource type's simple name.
pub fn build_script_matches(
    resource_type: &ResourceType,
    method: &Method,
    extension: Option<&str>,
    selectors: &[String],
    default_methods: &[Method],
) -> Vec<String> {
    let type_segment = resource_type.type_segment();
    let is_default_method = default_methods.contains(method);
    let extension = extension.filter(|e| !e.is_empty());

    let mut matches = Vec::new();
    for i in (0..selectors.len()).rev() {
        let selector_join = selectors[..=i].join("/");
        let for_method = format!("{type_segment}{method}.{selector_join}");
        let no_method = format!("{type_segment}{selector_join}");
        push_variants(&mut matches, no_method, for_method, extension, is_default_method);
    }

    let for_method = format!("{type_segment}{method}");
    let no_method = format!("{type_segment}{}", resource_type.simple_name());
    push_variants(&mut matches, no_method, for_method, extension, is_default_method);

    matches
}

/// The four-line emission pattern shared by every specificity level: the
/// extension forms first, method-less lines only for default methods.
fn push_variants(
    matches: &mut Vec<String>,
    no_method: String,
    for_method: String,
    extension: Option<&str>,
    is_default_method: bool,
) {
    if let Some(ext) = extension {
        if is_default_method {
            matches.push(format!("{no_method}.{ext}"));
        }
        matches.push(format!("{for_method}.{ext}"));
    }
    if is_default_method {
        matches.push(no_method);
    }
    matches.push(for_method);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(
        resource_type: &str,
        method: Method,
        extension: Option<&str>,
        selectors: &[&str],
    ) -> Vec<String> {
        let selectors: Vec<String> = selectors.iter().map(|s| s.to_string()).collect();
        build_script_matches(
            &ResourceType::from(resource_type),
            &method,
            extension,
            &selectors,
            &DEFAULT_METHODS,
        )
    }

    #[test]
    fn test_unversioned_type_without_selectors() {
        let matches = build("com.example.list", Method::GET, None, &[]);
        assert_eq!(
            matches,
            ["com.example.list/list", "com.example.list/GET"]
        );
    }

    #[test]
    fn test_versioned_type_embeds_version_in_every_candidate() {
        let matches = build("com.example.list/1.0.0", Method::GET, Some("html"), &[]);
        assert_eq!(
            matches,
            [
                "com.example.list/1.0.0/list.html",
                "com.example.list/1.0.0/GET.html",
                "com.example.list/1.0.0/list",
                "com.example.list/1.0.0/GET",
            ]
        );
        for candidate in &matches {
            assert!(candidate.starts_with("com.example.list/1.0.0/"));
        }
    }

    #[test]
    fn test_selector_prefixes_shrink_most_specific_first() {
        let matches = build(
            "com.example.list",
            Method::GET,
            Some("html"),
            &["mobile", "tablet"],
        );
        assert_eq!(
            matches,
            [
                "com.example.list/mobile/tablet.html",
                "com.example.list/GET.mobile/tablet.html",
                "com.example.list/mobile/tablet",
                "com.example.list/GET.mobile/tablet",
                "com.example.list/mobile.html",
                "com.example.list/GET.mobile.html",
                "com.example.list/mobile",
                "com.example.list/GET.mobile",
                "com.example.list/list.html",
                "com.example.list/GET.html",
                "com.example.list/list",
                "com.example.list/GET",
            ]
        );
        // Four lines per specificity level for a default method with an
        // extension: 4 * (n + 1) entries overall.
        assert_eq!(matches.len(), 4 * (2 + 1));
    }

    #[test]
    fn test_non_default_method_never_emits_method_less_forms() {
        let matches = build("com.example.list", Method::POST, Some("html"), &["mobile"]);
        assert_eq!(
            matches,
            [
                "com.example.list/POST.mobile.html",
                "com.example.list/POST.mobile",
                "com.example.list/POST.html",
                "com.example.list/POST",
            ]
        );
        assert!(matches.iter().all(|m| m.contains("POST")));
    }

    #[test]
    fn test_head_is_a_default_method() {
        let matches = build("com.example.list", Method::HEAD, None, &[]);
        assert_eq!(
            matches,
            ["com.example.list/list", "com.example.list/HEAD"]
        );
    }

    #[test]
    fn test_empty_extension_is_ignored() {
        let matches = build("com.example.list", Method::GET, Some(""), &[]);
        assert_eq!(
            matches,
            ["com.example.list/list", "com.example.list/GET"]
        );
    }

    #[test]
    fn test_multi_slash_type_is_not_split() {
        let matches = build(
            "app/components/list",
            Method::GET,
            Some("html"),
            &["mobile"],
        );
        assert_eq!(
            matches,
            [
                "app/components/list/mobile.html",
                "app/components/list/GET.mobile.html",
                "app/components/list/mobile",
                "app/components/list/GET.mobile",
                "app/components/list/list.html",
                "app/components/list/GET.html",
                "app/components/list/list",
                "app/components/list/GET",
            ]
        );
    }

    #[test]
    fn test_duplicates_are_tolerated() {
        let matches = build("list", Method::GET, None, &["list"]);
        assert_eq!(matches, ["list/list", "list/GET.list", "list/list", "list/GET"]);
    }

    #[test]
    fn test_builder_is_pure() {
        let selectors = ["mobile".to_string()];
        let rt = ResourceType::from("com.example.list/2.1");
        let first =
            build_script_matches(&rt, &Method::GET, Some("html"), &selectors, &DEFAULT_METHODS);
        let second =
            build_script_matches(&rt, &Method::GET, Some("html"), &selectors, &DEFAULT_METHODS);
        assert_eq!(first, second);
    }
}
