//! Test helpers for writing sample catalogs and building rank arguments.

use super::*;
use atlas_core::test_support::SampleCatalog;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Write `bytes` to `path`, creating parent directories.
pub(super) fn write_utf8(path: &Utf8Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directories");
    }
    std::fs::write(path, bytes).expect("write fixture file");
}

/// Temporary directory holding the sample catalog as JSON.
#[derive(Debug)]
pub(super) struct CatalogFixture {
    _tmp: TempDir,
    root: Utf8PathBuf,
    catalog: Utf8PathBuf,
}

impl CatalogFixture {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let catalog = root.join("catalog.json");
        let payload =
            serde_json::to_string_pretty(&SampleCatalog::build()).expect("serialize catalog");
        write_utf8(&catalog, payload.as_bytes());
        Self {
            _tmp: tmp,
            root,
            catalog,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn catalog(&self) -> &Utf8Path {
        &self.catalog
    }

    pub(super) fn args(&self) -> rank::RankArgs {
        rank::RankArgs {
            catalog: Some(self.catalog.clone()),
            ..rank::RankArgs::default()
        }
    }
}
