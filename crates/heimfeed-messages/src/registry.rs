//! Tag → renderer dispatch.
//!
//! [`renderer_for`] matches exhaustively over [`EventKind`], so adding a kind
//! without a renderer does not compile.

use crate::kind::EventKind;
use crate::messages::{
    Alias, AliasChown, AliasDelete, Avatar, Cert, CertAutorenew, CertDelete, Deployment,
    DeploymentDelete, DeploymentUnfreeze, Dns, DnsDelete, Domain, DomainBuy, DomainDelete, Login,
    Plan, Scale, SecretAdd, SecretDelete, SecretRename, TeamMemberAdd, TeamMemberDelete,
    TeamNameUpdate, TeamSlugUpdate, Username,
};
use heimfeed_core::{feed_debug, MessageRenderer};

#[must_use]
pub fn renderer_for(kind: EventKind) -> &'static dyn MessageRenderer {
    match kind {
        EventKind::Avatar => &Avatar,
        EventKind::Username => &Username,
        EventKind::Login => &Login,
        EventKind::Plan => &Plan,
        EventKind::Deployment => &Deployment,
        EventKind::DeploymentDelete => &DeploymentDelete,
        EventKind::DeploymentUnfreeze => &DeploymentUnfreeze,
        EventKind::Scale => &Scale,
        EventKind::Alias => &Alias,
        EventKind::AliasDelete => &AliasDelete,
        EventKind::AliasChown => &AliasChown,
        EventKind::Cert => &Cert,
        EventKind::CertAutorenew => &CertAutorenew,
        EventKind::CertDelete => &CertDelete,
        EventKind::Dns => &Dns,
        EventKind::DnsDelete => &DnsDelete,
        EventKind::Domain => &Domain,
        EventKind::DomainBuy => &DomainBuy,
        EventKind::DomainDelete => &DomainDelete,
        EventKind::SecretAdd => &SecretAdd,
        EventKind::SecretDelete => &SecretDelete,
        EventKind::SecretRename => &SecretRename,
        EventKind::TeamMemberAdd => &TeamMemberAdd,
        EventKind::TeamMemberDelete => &TeamMemberDelete,
        EventKind::TeamNameUpdate => &TeamNameUpdate,
        EventKind::TeamSlugUpdate => &TeamSlugUpdate,
    }
}

/// Kind and renderer for a wire tag. Unknown tags are logged and `None`.
#[must_use]
pub fn lookup(tag: &str) -> Option<(EventKind, &'static dyn MessageRenderer)> {
    let Some(kind) = EventKind::from_tag(tag) else {
        feed_debug!("no renderer for event type {tag:?}, skipping");
        return None;
    };
    Some((kind, renderer_for(kind)))
}

/// Renderer for a wire tag. `None` means the event is not shown.
#[must_use]
pub fn lookup_renderer(tag: &str) -> Option<&'static dyn MessageRenderer> {
    lookup(tag).map(|(_, renderer)| renderer)
}
