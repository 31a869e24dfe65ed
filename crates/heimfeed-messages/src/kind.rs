//! The closed set of feed event types this crate can render.
//!
//! Variants, wire tags, [`EventKind::ALL`] and [`EventKind::from_tag`] are all
//! generated from the single list in `event_kinds!`, so a new kind is listed
//! everywhere or nowhere.

use std::fmt;

macro_rules! event_kinds {
    ($($variant:ident => $tag:literal),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EventKind {
            $($variant,)*
        }

        const KIND_COUNT: usize = [$(stringify!($variant)),*].len();

        impl EventKind {
            pub const ALL: [EventKind; KIND_COUNT] = [$(EventKind::$variant),*];

            /// Wire tag as it appears in the event's `type` field.
            #[must_use]
            pub const fn tag(self) -> &'static str {
                match self {
                    $(EventKind::$variant => $tag,)*
                }
            }

            /// Kind for a wire tag. Unknown tags are `None`.
            #[must_use]
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(EventKind::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

event_kinds! {
    Avatar => "avatar",
    Username => "username",
    Login => "login",
    Plan => "plan",
    Deployment => "deployment",
    DeploymentDelete => "deployment-delete",
    DeploymentUnfreeze => "deployment-unfreeze",
    Scale => "scale",
    Alias => "alias",
    AliasDelete => "alias-delete",
    AliasChown => "alias-chown",
    Cert => "cert",
    CertAutorenew => "cert-autorenew",
    CertDelete => "cert-delete",
    Dns => "dns",
    DnsDelete => "dns-delete",
    Domain => "domain",
    DomainBuy => "domain-buy",
    DomainDelete => "domain-delete",
    SecretAdd => "secret-add",
    SecretDelete => "secret-delete",
    SecretRename => "secret-rename",
    TeamMemberAdd => "team-member-add",
    TeamMemberDelete => "team-member-delete",
    TeamNameUpdate => "team-name-update",
    TeamSlugUpdate => "team-slug-update",
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
