use analysis_run_options::{
    telemetry, with_extra_labels, with_name_prefix, with_name_suffix, with_owner,
    AnalysisRunOption, AnalysisRunOptions, NameLimits, NamespacedName, Owner,
};
use anyhow::{bail, Context};
use std::{collections::BTreeMap, env};
use tracing::info;

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let limits = NameLimits::from_env()?;
    let id = env::var("ANALYSIS_RUN_ID").context("ANALYSIS_RUN_ID must be set")?;
    let namespace = env::var("ANALYSIS_RUN_NAMESPACE").unwrap_or_else(|_| "default".to_string());

    let mut opts = Vec::new();
    if let Ok(prefix) = env::var("NAME_PREFIX") {
        opts.push(with_name_prefix(prefix));
    }
    if let Ok(suffix) = env::var("NAME_SUFFIX") {
        opts.push(with_name_suffix(suffix));
    }
    if let Ok(raw) = env::var("EXTRA_LABELS") {
        opts.push(parse_labels(&raw)?);
    }
    let mut uids = BTreeMap::new();
    if let Ok(raw) = env::var("OWNER") {
        let (owner, uid) = parse_owner(&raw)?;
        uids.insert(owner.reference.clone(), uid);
        opts.push(with_owner(owner));
    }

    let mut options = AnalysisRunOptions::new(limits);
    options.apply(opts);

    let meta = options.object_meta(&namespace, &id, |o| uids.get(&o.reference).cloned())?;
    info!(name = ?meta.name, "generated AnalysisRun metadata");
    print!("{}", serde_yaml::to_string(&meta)?);
    Ok(())
}

/// Parse `key=value,key2=value2`
fn parse_labels(raw: &str) -> anyhow::Result<AnalysisRunOption> {
    let mut labels = Vec::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid label {:?}, expected key=value", pair);
        };
        labels.push((key.trim(), value.trim()));
    }
    Ok(with_extra_labels(labels))
}

/// Parse `apiVersion,Kind,namespace/name,uid[,block]`
fn parse_owner(raw: &str) -> anyhow::Result<(Owner, String)> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    let (api_version, kind, reference, uid, block) = match fields.as_slice() {
        [api_version, kind, reference, uid] => (*api_version, *kind, *reference, *uid, false),
        [api_version, kind, reference, uid, block] => (
            *api_version,
            *kind,
            *reference,
            *uid,
            block
                .parse()
                .with_context(|| format!("invalid block flag {:?}", block))?,
        ),
        _ => bail!("invalid owner {:?}, expected apiVersion,Kind,namespace/name,uid[,block]", raw),
    };
    let Some((namespace, name)) = reference.split_once('/') else {
        bail!("invalid owner reference {:?}, expected namespace/name", reference);
    };

    Ok((
        Owner::new(api_version, kind, NamespacedName::new(namespace, name), block),
        uid.to_string(),
    ))
}
