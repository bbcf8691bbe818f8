//! Trove classifier to PKGBUILD license mapping

/// License tag used when no classifier is recognized
pub const CUSTOM_LICENSE: &str = "CUSTOM";

/// Known license classifiers and their PKGBUILD tags, checked in order
pub const LICENSE_CLASSIFIERS: &[(&str, &str)] = &[
    ("License :: OSI Approved :: Apache Software License", "APACHE"),
    ("License :: OSI Approved :: Artistic License", "Artistic2.0"),
    ("License :: OSI Approved :: Common Public License", "CPL"),
    (
        "License :: OSI Approved :: GNU Affero General Public License v3",
        "AGPL",
    ),
    (
        "License :: OSI Approved :: GNU Free Documentation License (FDL)",
        "FDL",
    ),
    (
        "License :: OSI Approved :: GNU General Public License (GPL)",
        "GPL",
    ),
    (
        "License :: OSI Approved :: GNU Library or Lesser General Public License (LGPL)",
        "LGPL",
    ),
    (
        "License :: OSI Approved :: Mozilla Public License 1.1 (MPL 1.1)",
        "MPL",
    ),
    (
        "License :: OSI Approved :: Python Software Foundation License",
        "PSF",
    ),
    ("License :: OSI Approved :: Zope Public License", "ZPL"),
];

/// Pick the license tag for a set of classifiers
///
/// The table is walked in order and the first entry present in
/// `classifiers` wins. Falls back to [`CUSTOM_LICENSE`].
#[must_use]
pub fn license_from_classifiers<S: AsRef<str>>(classifiers: &[S]) -> &'static str {
    LICENSE_CLASSIFIERS
        .iter()
        .find(|(classifier, _)| classifiers.iter().any(|c| c.as_ref() == *classifier))
        .map_or(CUSTOM_LICENSE, |&(_, tag)| tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_classifier() {
        let classifiers = [
            "Programming Language :: Python",
            "License :: OSI Approved :: Apache Software License",
        ];
        assert_eq!(license_from_classifiers(&classifiers), "APACHE");
    }

    #[test]
    fn test_lgpl_classifier_is_single_line() {
        let classifiers =
            ["License :: OSI Approved :: GNU Library or Lesser General Public License (LGPL)"];
        assert_eq!(license_from_classifiers(&classifiers), "LGPL");
    }

    #[test]
    fn test_unknown_classifier_is_custom() {
        let classifiers = ["License :: OSI Approved :: MIT License"];
        assert_eq!(license_from_classifiers(&classifiers), CUSTOM_LICENSE);
        assert_eq!(license_from_classifiers::<&str>(&[]), CUSTOM_LICENSE);
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // GPL comes after APACHE in the table, regardless of classifier order
        let classifiers = [
            "License :: OSI Approved :: GNU General Public License (GPL)",
            "License :: OSI Approved :: Apache Software License",
        ];
        assert_eq!(license_from_classifiers(&classifiers), "APACHE");
    }

    #[test]
    fn test_partial_match_does_not_count() {
        let classifiers = ["License :: OSI Approved :: Apache Software License 2.0"];
        assert_eq!(license_from_classifiers(&classifiers), CUSTOM_LICENSE);
    }
}
