//! In-memory `StatusStore` used by tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::DynamicObject;
use serde_json::{json, Value};

use crate::core::reporter::k8s::k8s_status_store::StatusStore;
use crate::core::reporter::resource_target::ResourceTarget;
use crate::errors::Result;

#[derive(Default)]
pub(crate) struct FakeStatusStore {
    objects: Mutex<HashMap<(String, String), DynamicObject>>,
    versions: AtomicUsize,
    /// When set, another writer bumps the object right after each fetch.
    pub(crate) race_after_fetch: AtomicBool,
    pub(crate) fetches: AtomicUsize,
    pub(crate) writes: AtomicUsize,
}

impl FakeStatusStore {
    fn key(target: &ResourceTarget) -> (String, String) {
        (target.namespace.clone(), target.id.clone())
    }

    fn next_version(&self) -> String {
        (self.versions.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }

    pub(crate) fn insert(&self, target: &ResourceTarget, data: Value) {
        let obj = DynamicObject {
            types: None,
            metadata: ObjectMeta {
                name: Some(target.id.clone()),
                namespace: Some(target.namespace.clone()),
                resource_version: Some(self.next_version()),
                ..Default::default()
            },
            data,
        };
        self.objects.lock().unwrap().insert(Self::key(target), obj);
    }

    pub(crate) fn insert_with_properties(&self, target: &ResourceTarget, props: Value) {
        self.insert(
            target,
            json!({"spec": {"displayName": "untouched"}, "status": {"properties": props}}),
        );
    }

    pub(crate) fn object(&self, target: &ResourceTarget) -> Option<DynamicObject> {
        self.objects.lock().unwrap().get(&Self::key(target)).cloned()
    }

    fn bump(&self, target: &ResourceTarget) {
        let version = self.next_version();
        if let Some(obj) = self.objects.lock().unwrap().get_mut(&Self::key(target)) {
            obj.metadata.resource_version = Some(version);
        }
    }
}

#[async_trait]
impl StatusStore for FakeStatusStore {
    async fn fetch(&self, target: &ResourceTarget) -> Result<DynamicObject> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let obj = self
            .object(target)
            .ok_or_else(|| anyhow::anyhow!("{} \"{}\" not found", target.kind, target.id))?;
        if self.race_after_fetch.load(Ordering::SeqCst) {
            self.bump(target);
        }
        Ok(obj)
    }

    async fn replace_status(
        &self,
        target: &ResourceTarget,
        status: &DynamicObject,
    ) -> Result<DynamicObject> {
        let mut objects = self.objects.lock().unwrap();
        let current = objects
            .get_mut(&Self::key(target))
            .ok_or_else(|| anyhow::anyhow!("{} \"{}\" not found", target.kind, target.id))?;

        if current.metadata.resource_version != status.metadata.resource_version {
            return Err(anyhow::anyhow!(
                "Operation cannot be fulfilled on {} \"{}\": the object has been modified",
                target.kind,
                target.id
            )
            .into());
        }

        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(obj) = current.data.as_object_mut() {
            obj.insert("status".into(), status.data["status"].clone());
        }
        current.metadata.resource_version =
            Some((self.versions.fetch_add(1, Ordering::SeqCst) + 1).to_string());
        Ok(current.clone())
    }
}
