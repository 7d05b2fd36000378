use crate::{
    error::{Error, Result},
    options::AnalysisRunOptions,
    owner::Owner,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference};

/// Separator between the name components
pub const NAME_SEPARATOR: char = '.';

impl AnalysisRunOptions {
    /// Compose the AnalysisRun name from the prefix, the sortable `id` and
    /// the suffix. Empty components are left out together with their
    /// separator.
    pub fn resource_name(&self, id: &str) -> Result<String> {
        let expected = self.limits().id_length();
        if id.len() != expected {
            return Err(Error::IdentifierLength {
                expected,
                actual: id.len(),
            });
        }

        let mut name = String::with_capacity(self.limits().max_name_length());
        for part in [self.name_prefix.as_str(), id, self.name_suffix.as_str()] {
            if part.is_empty() {
                continue;
            }
            if !name.is_empty() {
                name.push(NAME_SEPARATOR);
            }
            name.push_str(part);
        }
        Ok(name)
    }

    /// Owner references for all owners, in the order they were added.
    /// `resolve_uid` looks up the UID of the live owner object.
    pub fn owner_references<F>(&self, mut resolve_uid: F) -> Result<Vec<OwnerReference>>
    where
        F: FnMut(&Owner) -> Option<String>,
    {
        self.owners
            .iter()
            .map(|owner| {
                resolve_uid(owner)
                    .map(|uid| owner.owner_reference(uid))
                    .ok_or_else(|| Error::OwnerNotFound {
                        namespace: owner.reference.namespace.clone(),
                        name: owner.reference.name.clone(),
                    })
            })
            .collect()
    }

    /// Object metadata for a new AnalysisRun in `namespace`
    pub fn object_meta<F>(&self, namespace: &str, id: &str, resolve_uid: F) -> Result<ObjectMeta>
    where
        F: FnMut(&Owner) -> Option<String>,
    {
        let owner_references = self.owner_references(resolve_uid)?;
        Ok(ObjectMeta {
            name: Some(self.resource_name(id)?),
            namespace: Some(namespace.to_string()),
            labels: self.extra_labels.clone(),
            owner_references: (!owner_references.is_empty()).then_some(owner_references),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::NameLimits,
        options::{with_extra_labels, with_name_prefix, with_name_suffix, with_owner},
        owner::NamespacedName,
    };
    use proptest::prelude::*;
    use rstest::rstest;

    const ID: &str = "01HQ7Z8K3V5X9Y2W4R6T8P0M1N";

    #[rstest]
    #[case::all("stage-a", "abc1234", "stage-a.01HQ7Z8K3V5X9Y2W4R6T8P0M1N.abc1234")]
    #[case::no_suffix("stage-a", "", "stage-a.01HQ7Z8K3V5X9Y2W4R6T8P0M1N")]
    #[case::no_prefix("", "abc1234", "01HQ7Z8K3V5X9Y2W4R6T8P0M1N.abc1234")]
    #[case::id_only("", "", "01HQ7Z8K3V5X9Y2W4R6T8P0M1N")]
    fn test_resource_name(#[case] prefix: &str, #[case] suffix: &str, #[case] expected: &str) {
        let mut opts = AnalysisRunOptions::default();
        opts.apply([with_name_prefix(prefix), with_name_suffix(suffix)]);
        assert_eq!(opts.resource_name(ID).unwrap(), expected);
    }

    #[test]
    fn test_resource_name_at_max_length() {
        let mut opts = AnalysisRunOptions::default();
        opts.apply([
            with_name_prefix("x".repeat(260)),
            with_name_suffix("abcdef12"),
        ]);
        let name = opts.resource_name(ID).unwrap();
        assert_eq!(name.len(), 253);
        assert!(name.ends_with(".abcdef1"));
    }

    #[test]
    fn test_resource_name_rejects_wrong_id_length() {
        let opts = AnalysisRunOptions::default();
        assert!(matches!(
            opts.resource_name("short"),
            Err(Error::IdentifierLength {
                expected: 26,
                actual: 5
            })
        ));

        let opts = AnalysisRunOptions::new(NameLimits::new(253, 5, 7).unwrap());
        assert_eq!(opts.resource_name("short").unwrap(), "short");
    }

    #[test]
    fn test_limits_without_prefix_room_never_reach_a_name() {
        // 30 leaves no room for a prefix next to a 26 character id and a 7 character suffix
        assert!(matches!(
            NameLimits::new(30, 26, 7),
            Err(Error::ConfigError(_))
        ));

        let limits = NameLimits::new(36, 26, 7).unwrap();
        let mut opts = AnalysisRunOptions::new(limits);
        opts.apply([with_name_prefix("p".repeat(10)), with_name_suffix("abcdefgh")]);
        let name = opts.resource_name(&"0".repeat(26)).unwrap();
        assert_eq!(name.len(), 36);
        assert!(name.starts_with("p."));
    }

    proptest! {
        #[test]
        fn prop_name_fits_custom_limits(
            max_name in 1usize..300,
            id_length in 1usize..40,
            max_suffix in 0usize..20,
            prefix in "[a-z0-9-]{0,300}",
            suffix in "[a-z0-9]{0,30}",
        ) {
            let Ok(limits) = NameLimits::new(max_name, id_length, max_suffix) else {
                prop_assume!(false);
                unreachable!();
            };

            let mut opts = AnalysisRunOptions::new(limits);
            opts.apply([with_name_prefix(prefix), with_name_suffix(suffix)]);

            let name = opts.resource_name(&"0".repeat(id_length)).unwrap();
            prop_assert!(name.len() <= max_name);
        }
    }

    #[test]
    fn test_owner_references_in_order() {
        let a = Owner::new("v1", "ConfigMap", NamespacedName::new("ns", "a"), true);
        let b = Owner::new("v1", "Secret", NamespacedName::new("ns", "b"), false);

        let mut opts = AnalysisRunOptions::default();
        opts.apply([with_owner(a), with_owner(b)]);

        let refs = opts
            .owner_references(|o| Some(format!("uid-{}", o.reference.name)))
            .unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].name, "a");
        assert_eq!(refs[0].uid, "uid-a");
        assert_eq!(refs[0].block_owner_deletion, Some(true));
        assert_eq!(refs[1].kind, "Secret");
        assert_eq!(refs[1].block_owner_deletion, Some(false));
    }

    #[test]
    fn test_owner_references_unresolved() {
        let mut opts = AnalysisRunOptions::default();
        opts.apply([with_owner(Owner::new(
            "v1",
            "ConfigMap",
            NamespacedName::new("ns", "gone"),
            true,
        ))]);

        let err = opts.owner_references(|_| None).unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(err.to_string(), "Owner not found: ns/gone");
    }

    #[test]
    fn test_object_meta() {
        let mut opts = AnalysisRunOptions::default();
        opts.apply([
            with_name_prefix("stage-a"),
            with_extra_labels([("kargo.akuity.io/stage", "stage-a")]),
        ]);

        let meta = opts.object_meta("kargo-demo", ID, |_| None).unwrap();
        assert_eq!(meta.name.as_deref(), Some("stage-a.01HQ7Z8K3V5X9Y2W4R6T8P0M1N"));
        assert_eq!(meta.namespace.as_deref(), Some("kargo-demo"));
        assert_eq!(
            meta.labels.unwrap().get("kargo.akuity.io/stage").map(String::as_str),
            Some("stage-a")
        );
        assert_eq!(meta.owner_references, None);
    }
}
