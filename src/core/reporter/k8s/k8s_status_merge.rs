use std::collections::{BTreeMap, HashMap};

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::DynamicObject;
use kube::core::TypeMeta;
use serde_json::{json, Value};

use crate::core::reporter::resource_target::ResourceTarget;

/// Kind stamped on status-only update objects.
pub const STATUS_KIND: &str = "Status";

/// Read `status.properties` from a fetched object.
///
/// A missing or malformed status yields an empty set; non-string values are
/// skipped rather than failing the report.
pub fn existing_properties(object: &DynamicObject) -> BTreeMap<String, String> {
    object
        .data
        .get("status")
        .and_then(|status| status.get("properties"))
        .and_then(Value::as_object)
        .map(|props| {
            props
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

/// Combine the stored properties with the caller's.
///
/// Caller keys are applied last and always win. With `overwrite` the stored
/// set is ignored entirely.
pub fn merge_status(
    existing: &BTreeMap<String, String>,
    incoming: &HashMap<String, String>,
    overwrite: bool,
) -> BTreeMap<String, String> {
    let mut merged = if overwrite {
        BTreeMap::new()
    } else {
        existing.clone()
    };
    merged.extend(incoming.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Minimal object for a status subresource update, carrying the
/// concurrency token read before the merge.
pub fn status_object(
    target: &ResourceTarget,
    properties: BTreeMap<String, String>,
    resource_version: Option<String>,
) -> DynamicObject {
    DynamicObject {
        types: Some(TypeMeta {
            api_version: target.api_version(),
            kind: STATUS_KIND.to_string(),
        }),
        metadata: ObjectMeta {
            name: Some(target.id.clone()),
            resource_version,
            ..Default::default()
        },
        data: json!({
            "status": {
                "properties": properties,
            }
        }),
    }
}
