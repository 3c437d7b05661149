use std::collections::BTreeMap;

use tracing::{info_span, Span};

/// Process-wide handles shared by every provider a manager owns.
///
/// Injected through `Provider::set_context`; providers only read from it.
#[derive(Debug, Clone)]
pub struct ManagerContext {
    /// Logical name of the owning manager (e.g. "solution-manager").
    pub name: String,

    /// Free-form labels attached to every provider span.
    pub labels: BTreeMap<String, String>,

    span: Span,
}

impl ManagerContext {
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        let span = info_span!("manager", name = %name);
        Self {
            name,
            labels: BTreeMap::new(),
            span,
        }
    }

    pub fn with_label<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Span that provider operations are recorded under.
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Default for ManagerContext {
    fn default() -> Self {
        Self::new("default")
    }
}
