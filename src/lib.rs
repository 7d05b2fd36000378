pub mod config;
pub mod error;
pub mod metadata;
pub mod options;
pub mod owner;
pub mod telemetry;

pub use config::NameLimits;
pub use error::{Error, Result};
pub use options::{
    with_extra_labels, with_name_prefix, with_name_suffix, with_owner, AnalysisRunOption,
    AnalysisRunOptions,
};
pub use owner::{NamespacedName, Owner};
