//! JSON file collaborator for `.fuzz` files.
//!
//! A `.fuzz` file is a JSON array of [`FuzzySetRecord`]s in registry order.
//! Saving writes the whole file in one call; loading reads it in one call and
//! replays the records through
//! [`MembershipRegistry::load_records`], inheriting its no-rollback semantics.
//!
//! Requires the `json` feature.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::PersistError;
use crate::record::FuzzySetRecord;
use crate::registry::MembershipRegistry;

/// Conventional file extension for saved registries.
pub const FILE_EXTENSION: &str = "fuzz";

/// Serialize the registry's records to a JSON string.
pub fn to_json(registry: &MembershipRegistry) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&registry.records())?)
}

/// Parse a JSON list of records and load them into `registry`.
///
/// Returns the number of records loaded. A malformed document loads nothing;
/// a rejected record leaves earlier records loaded.
pub fn from_json(registry: &mut MembershipRegistry, json: &str) -> Result<usize, PersistError> {
    let records: Vec<FuzzySetRecord> = serde_json::from_str(json)?;
    Ok(registry.load_records(records)?)
}

/// Write the registry to `path`, replacing any existing file.
pub fn save_to_path(
    registry: &MembershipRegistry,
    path: impl AsRef<Path>,
) -> Result<(), PersistError> {
    let path = path.as_ref();
    let json = to_json(registry)?;
    fs::write(path, json)?;
    info!(path = %path.display(), count = registry.len(), "saved fuzzy sets");
    Ok(())
}

/// Read `path` and load its records into `registry`.
pub fn load_from_path(
    registry: &mut MembershipRegistry,
    path: impl AsRef<Path>,
) -> Result<usize, PersistError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let loaded = from_json(registry, &json)?;
    info!(path = %path.display(), loaded, "loaded fuzzy sets");
    Ok(loaded)
}
