use crate::{config::NameLimits, owner::Owner};
use std::collections::BTreeMap;
use tracing::trace;

mod labels;
mod name;

/// Options for building an AnalysisRun.
///
/// Built up by applying [`AnalysisRunOption`]s in order. The prefix and
/// suffix are cut to the lengths allowed by the [`NameLimits`] in force, so
/// `prefix.id.suffix` always fits within the maximum name length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisRunOptions {
    pub name_prefix: String,
    pub name_suffix: String,
    pub extra_labels: Option<BTreeMap<String, String>>,
    pub owners: Vec<Owner>,
    limits: NameLimits,
}

impl AnalysisRunOptions {
    pub fn new(limits: NameLimits) -> Self {
        Self {
            name_prefix: String::new(),
            name_suffix: String::new(),
            extra_labels: None,
            owners: Vec::new(),
            limits,
        }
    }

    pub fn limits(&self) -> &NameLimits {
        &self.limits
    }

    /// Apply the given options in order
    pub fn apply<I>(&mut self, opts: I)
    where
        I: IntoIterator<Item = AnalysisRunOption>,
    {
        for opt in opts {
            opt.apply_to(self);
        }
    }
}

/// A single change to [`AnalysisRunOptions`].
///
/// Options are plain values; clone one to apply it more than once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisRunOption {
    /// Sets the name prefix, truncated to the prefix limit. Last one wins.
    NamePrefix(String),
    /// Sets the name suffix, truncated to the suffix limit. Last one wins.
    NameSuffix(String),
    /// Adds labels. Can be passed multiple times, later values win per key.
    /// The first application moves the map into the options.
    ExtraLabels(BTreeMap<String, String>),
    /// Adds an owner. Can be passed multiple times, owners are never merged.
    Owner(Owner),
}

impl AnalysisRunOption {
    pub fn apply_to(self, opts: &mut AnalysisRunOptions) {
        match self {
            AnalysisRunOption::NamePrefix(prefix) => {
                let max = opts.limits.max_prefix_length();
                opts.name_prefix = name::truncate(prefix, max, "prefix");
            }
            AnalysisRunOption::NameSuffix(suffix) => {
                let max = opts.limits.max_suffix_length();
                opts.name_suffix = name::truncate(suffix, max, "suffix");
            }
            AnalysisRunOption::ExtraLabels(extra) => {
                trace!(count = extra.len(), "adding extra labels");
                labels::merge(&mut opts.extra_labels, extra);
            }
            AnalysisRunOption::Owner(owner) => {
                trace!(owner = %owner.reference, kind = %owner.kind, "adding owner");
                opts.owners.push(owner);
            }
        }
    }
}

pub fn with_name_prefix(prefix: impl Into<String>) -> AnalysisRunOption {
    AnalysisRunOption::NamePrefix(prefix.into())
}

pub fn with_name_suffix(suffix: impl Into<String>) -> AnalysisRunOption {
    AnalysisRunOption::NameSuffix(suffix.into())
}

pub fn with_extra_labels<I, K, V>(labels: I) -> AnalysisRunOption
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    AnalysisRunOption::ExtraLabels(
        labels
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

pub fn with_owner(owner: Owner) -> AnalysisRunOption {
    AnalysisRunOption::Owner(owner)
}
