//! Assembly of mapped resources into searchset Bundles.

use crate::models::{BundleEntry, BundleResource, Resource};

const SEARCHSET: &str = "searchset";

impl BundleResource {
    /// Wrap pre-built entries in a searchset Bundle, preserving order.
    /// An empty entry list yields an empty Bundle rather than an error.
    pub fn searchset(entry: Vec<BundleEntry>) -> Self {
        Self {
            bundle_type: SEARCHSET.to_string(),
            entry,
        }
    }
}

/// Build one Bundle entry per record, in input order. Each entry pairs the
/// mapped resource with a `fullUrl` of `<type_name>/<domain id>`.
///
/// The assembler is agnostic to resource content; heterogeneous Bundles
/// are built by concatenating entry lists before wrapping.
pub fn entries<T, F, M>(records: &[T], type_name: &str, id_of: F, map: M) -> Vec<BundleEntry>
where
    F: Fn(&T) -> i32,
    M: Fn(&T) -> Resource,
{
    records
        .iter()
        .map(|record| BundleEntry {
            full_url: format!("{}/{}", type_name, id_of(record)),
            resource: map(record),
        })
        .collect()
}

/// Map a homogeneous record collection straight into a searchset Bundle.
pub fn searchset<T, F, M>(records: &[T], type_name: &str, id_of: F, map: M) -> BundleResource
where
    F: Fn(&T) -> i32,
    M: Fn(&T) -> Resource,
{
    BundleResource::searchset(entries(records, type_name, id_of, map))
}
