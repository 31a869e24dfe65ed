//! One renderer per event kind.
//!
//! Renderers never fail: a missing payload field is replaced by a generic
//! noun ("a deployment") so the line still reads naturally.

mod account;
mod alias;
mod avatar;
mod deployment;
mod domain;
mod secret;
mod team;

pub use account::{Login, Plan, Username};
pub use alias::{Alias, AliasChown, AliasDelete};
pub use avatar::Avatar;
pub use deployment::{Deployment, DeploymentDelete, DeploymentUnfreeze, Scale};
pub use domain::{Cert, CertAutorenew, CertDelete, Dns, DnsDelete, Domain, DomainBuy, DomainDelete};
pub use secret::{SecretAdd, SecretDelete, SecretRename};
pub use team::{TeamMemberAdd, TeamMemberDelete, TeamNameUpdate, TeamSlugUpdate};

use heimfeed_core::MessageContext;

/// First present payload field among `paths`, or `fallback`.
fn field_or(ctx: &MessageContext<'_>, paths: &[&str], fallback: &str) -> String {
    paths
        .iter()
        .find_map(|path| ctx.text(path))
        .unwrap_or_else(|| fallback.to_owned())
}
