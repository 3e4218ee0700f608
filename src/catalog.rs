// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Corona catalogs stored as JSON.
//!
//! A catalog holds the unique coronas for several center sizes in compact
//! form, keyed by center size, with a metadata block:
//!
//! ```json
//! {
//!   "metadata": {
//!     "generated": "2025-01-01T00:00:00Z",
//!     "centerSizes": [1, 2],
//!     "counts": { "1": 24, "2": 34 },
//!     "totalCoronas": 58
//!   },
//!   "coronas": { "1": ["1|2^0|2^0|2^0|2^0", ...], "2": [...] }
//! }
//! ```

use crate::codec::ParseError;
use crate::enumerate::enumerate_unique_coronas;
use crate::geometry::{Corona, SizeSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or writing a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to access catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Summary of a catalog's contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    /// When the catalog was generated.
    pub generated: DateTime<Utc>,
    /// Center sizes enumerated, in order.
    pub center_sizes: Vec<u32>,
    /// Number of unique coronas per center size.
    pub counts: BTreeMap<u32, usize>,
    pub total_coronas: usize,
}

/// Unique coronas for a set of center sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub metadata: CatalogMetadata,
    /// Compact strings per center size, in enumeration order.
    pub coronas: BTreeMap<u32, Vec<String>>,
}

impl Catalog {
    /// Enumerate every center in `center_sizes` and collect the results.
    pub fn generate(center_sizes: &[u32], allowed_sizes: SizeSet) -> Self {
        let mut counts = BTreeMap::new();
        let mut coronas = BTreeMap::new();

        for &center in center_sizes {
            let found = enumerate_unique_coronas(center, allowed_sizes);
            counts.insert(center, found.len());
            coronas.insert(center, found.iter().map(Corona::to_compact).collect());
        }

        let total_coronas = counts.values().sum();
        tracing::info!(centers = ?center_sizes, total_coronas, "generated catalog");

        Self {
            metadata: CatalogMetadata {
                generated: Utc::now(),
                center_sizes: center_sizes.to_vec(),
                counts,
                total_coronas,
            },
            coronas,
        }
    }

    /// Write the catalog as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| CatalogError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "saved catalog");
        Ok(())
    }

    /// Read a catalog written by [`Catalog::save`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Decode the coronas stored for `center`.
    ///
    /// A center with no entry yields an empty list.
    pub fn coronas_for(&self, center: u32) -> Result<Vec<Corona>, ParseError> {
        self.coronas
            .get(&center)
            .map(|list| list.iter().map(|s| Corona::from_compact(s)).collect())
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Load the coronas for `center` from the catalog at `path`.
///
/// Never fails: a missing or corrupt file, or an undecodable entry, is logged
/// and yields an empty list.
pub fn load_coronas(path: &Path, center: u32) -> Vec<Corona> {
    let catalog = match Catalog::load(path) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "could not load catalog");
            return Vec::new();
        }
    };
    match catalog.coronas_for(center) {
        Ok(coronas) => coronas,
        Err(err) => {
            tracing::warn!(path = %path.display(), center, %err, "bad corona in catalog");
            Vec::new()
        }
    }
}
