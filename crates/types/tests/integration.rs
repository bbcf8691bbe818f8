//! Integration tests for types

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use pypi2pkgbuild_types::*;

    #[test]
    fn test_release_record_builder() {
        let record = ReleaseRecord::new("python-requests", "2.0.0")
            .with_summary("HTTP for Humans")
            .with_classifier("License :: OSI Approved :: Apache Software License");

        assert_eq!(record.name, "python-requests");
        assert_eq!(record.version, "2.0.0");
        assert_eq!(record.summary.as_deref(), Some("HTTP for Humans"));
        assert!(record.license.is_none());
        assert_eq!(record.classifiers.len(), 1);
    }

    #[test]
    fn test_runtime_tag_display() {
        assert_eq!(RuntimeTag::default().to_string(), "python2");
        assert_eq!(RuntimeTag::Python2.as_str(), "python2");
    }

    proptest! {
        #[test]
        fn prop_single_known_classifier_maps_to_its_tag(
            idx in 0..LICENSE_CLASSIFIERS.len(),
            noise in proptest::collection::vec("Topic :: [A-Za-z ]{1,20}", 0..5),
        ) {
            let (classifier, tag) = LICENSE_CLASSIFIERS[idx];
            let mut classifiers = noise;
            classifiers.push(classifier.to_string());
            prop_assert_eq!(license_from_classifiers(&classifiers), tag);
        }

        #[test]
        fn prop_unrecognized_classifiers_are_custom(
            classifiers in proptest::collection::vec("Topic :: [A-Za-z ]{1,20}", 0..8),
        ) {
            prop_assert_eq!(license_from_classifiers(&classifiers), CUSTOM_LICENSE);
        }
    }
}
