#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for pypi2pkgbuild
//!
//! This crate provides the data model shared by the index client and the
//! recipe drafter: release records, downloadable artifacts, the license
//! classifier table and the runtime tag.

pub mod license;
pub mod release;

pub use license::{license_from_classifiers, CUSTOM_LICENSE, LICENSE_CLASSIFIERS};
pub use release::{Artifact, ReleaseRecord, RuntimeTag};
