use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::{Resource, ResourceExt};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace and name of an object
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

impl NamespacedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Reference to an object owning the AnalysisRun
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub api_version: String,
    pub kind: String,
    pub reference: NamespacedName,

    /// Block deletion of the owner while the AnalysisRun exists
    pub block_deletion: bool,
}

impl Owner {
    pub fn new(
        api_version: impl Into<String>,
        kind: impl Into<String>,
        reference: NamespacedName,
        block_deletion: bool,
    ) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
            reference,
            block_deletion,
        }
    }

    /// Build an owner from a typed Kubernetes object
    pub fn from_resource<K>(obj: &K, block_deletion: bool) -> Self
    where
        K: Resource<DynamicType = ()>,
    {
        Self {
            api_version: K::api_version(&()).into_owned(),
            kind: K::kind(&()).into_owned(),
            reference: NamespacedName::new(obj.namespace().unwrap_or_default(), obj.name_any()),
            block_deletion,
        }
    }

    /// Owner reference for this owner, given the UID of the live object
    pub fn owner_reference(&self, uid: impl Into<String>) -> OwnerReference {
        OwnerReference {
            api_version: self.api_version.clone(),
            kind: self.kind.clone(),
            name: self.reference.name.clone(),
            uid: uid.into(),
            block_owner_deletion: Some(self.block_deletion),
            controller: None,
        }
    }

    /// Same as [`Owner::owner_reference`], marking the owner as the managing controller
    pub fn controller_owner_reference(&self, uid: impl Into<String>) -> OwnerReference {
        OwnerReference {
            controller: Some(true),
            ..self.owner_reference(uid)
        }
    }
}
