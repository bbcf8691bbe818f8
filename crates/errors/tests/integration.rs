//! Integration tests for error types

#[cfg(test)]
mod tests {
    use pypi2pkgbuild_errors::*;

    #[test]
    fn test_error_conversion() {
        let net_err = NetworkError::Timeout {
            url: "https://pypi.python.org/pypi".into(),
        };
        let err: Error = net_err.into();
        assert!(matches!(err, Error::Network(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_index_error_display_is_transparent() {
        let err: Error = IndexError::NoVersions {
            package: "frobnicate".into(),
        }
        .into();
        assert_eq!(err.to_string(), "No versions found for frobnicate");
        assert_eq!(err.user_code(), Some("index.no_versions"));
    }

    #[test]
    fn test_not_found_names_package_and_version() {
        let err = IndexError::NotFound {
            package: "requests".into(),
            version: "9.9.9".into(),
        };
        assert_eq!(
            err.to_string(),
            "The requested package requests, version 9.9.9 does not exist"
        );
    }

    #[test]
    fn test_fault_is_embedded_in_retrieval_error() {
        let fault = NetworkError::RpcFault {
            code: 1,
            message: "boom".into(),
        };
        assert_eq!(fault.to_string(), "<Fault 1: 'boom'>");

        let err = IndexError::RetrievalFailed {
            package: "requests".into(),
            version: "2.0.0".into(),
            fault: fault.to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.starts_with("Unable to retrieve release data for requests, version 2.0.0"));
        assert!(rendered.contains("<Fault 1: 'boom'>"));
    }

    #[test]
    fn test_listing_failure_names_package() {
        let err: Error = IndexError::ListingFailed {
            package: "requests".into(),
            fault: "<Fault 1: 'boom'>".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Unable to list releases for requests\n    <Fault 1: 'boom'>"
        );
        assert_eq!(err.user_code(), Some("index.listing_failed"));
    }

    #[test]
    fn test_recipe_exists_has_hint() {
        let err: Error = DraftError::RecipeExists {
            path: "requests-2.0.0".into(),
        }
        .into();
        assert!(err.user_message().contains("PKGBUILD does exist"));
        assert!(err.user_hint().is_some());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err = Error::io_with_path(&io_err, "/tmp/out");
        match err {
            Error::Io { kind, path, .. } => {
                assert_eq!(kind, std::io::ErrorKind::PermissionDenied);
                assert_eq!(path, Some(std::path::PathBuf::from("/tmp/out")));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
