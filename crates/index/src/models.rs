//! Conversion of XML-RPC answers into typed records

use pypi2pkgbuild_errors::{Error, IndexError};
use pypi2pkgbuild_net::Value;
use pypi2pkgbuild_types::{Artifact, ReleaseRecord};

/// Read an optional text member; nil and missing members are `None`
fn text(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn invalid(package: &str, message: impl Into<String>) -> Error {
    IndexError::InvalidRecord {
        package: package.to_string(),
        message: message.into(),
    }
    .into()
}

/// Build a release record from a `release_data` answer
///
/// An empty or falsy answer means the index knows no such release and
/// yields `None`.
pub(crate) fn release_from_value(
    package: &str,
    value: &Value,
) -> Result<Option<ReleaseRecord>, Error> {
    if !value.is_truthy() {
        return Ok(None);
    }
    if value.as_struct().is_none() {
        return Err(invalid(package, "release data is not a struct"));
    }

    let name = text(value, "name").ok_or_else(|| invalid(package, "missing name"))?;
    let version = text(value, "version").ok_or_else(|| invalid(package, "missing version"))?;

    let classifiers = value
        .get("classifiers")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Some(ReleaseRecord {
        name,
        version,
        summary: text(value, "summary"),
        home_page: text(value, "home_page"),
        license: text(value, "license"),
        classifiers,
        download_url: text(value, "download_url"),
    }))
}

/// Build the artifact list from a `release_urls` answer
pub(crate) fn artifacts_from_value(package: &str, value: &Value) -> Result<Vec<Artifact>, Error> {
    let Some(items) = value.as_array() else {
        return Err(invalid(package, "release urls are not an array"));
    };

    items
        .iter()
        .map(|item| {
            let filename = text(item, "filename")
                .ok_or_else(|| invalid(package, "artifact without filename"))?;
            let url = text(item, "url").ok_or_else(|| invalid(package, "artifact without url"))?;
            Ok(Artifact::new(filename, url, text(item, "md5_digest")))
        })
        .collect()
}

/// Collect the version strings of a `package_releases` answer
pub(crate) fn versions_from_value(package: &str, value: &Value) -> Result<Vec<String>, Error> {
    let Some(items) = value.as_array() else {
        return Err(invalid(package, "version list is not an array"));
    };
    Ok(items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect())
}
