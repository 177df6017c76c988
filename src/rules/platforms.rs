//! Ordered per-platform rules for recovering a handle or provider id.
//!
//! Rules are tried in order and the first one whose predicate holds wins,
//! even if it then extracts nothing. Only the first-segment rule checks the
//! domain's handle pattern; every proposed handle then goes through
//! [`accept_handle`](super::accept_handle) before it is returned.

use log::debug;
use url::Url;

use super::{accept_handle, handle_regex, SUBDOMAIN_HANDLE_DOMAINS};
use crate::url::utils::query_value;

/// What a rule sees of the sanitized URL.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub url: &'a Url,
    /// Registrable domain, e.g. `youtube.com`.
    pub domain: &'a str,
    /// Subdomain, possibly empty.
    pub subdomain: &'a str,
    /// Non-empty path segments.
    pub segments: &'a [String],
}

impl RuleContext<'_> {
    fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// `/<first>/<second>` on `domain`, with a non-empty second segment.
    fn nested_under(&self, domain: &str, first: &str) -> bool {
        self.domain == domain && self.segment(0) == Some(first) && self.segments.len() > 1
    }
}

/// Identity recovered by a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub handle: Option<String>,
    pub provider_id: Option<String>,
}

impl Identity {
    fn handle(handle: &str) -> Self {
        Self {
            handle: Some(handle.to_string()),
            provider_id: None,
        }
    }

    fn provider_id(id: Option<String>) -> Self {
        Self {
            handle: None,
            provider_id: id,
        }
    }
}

/// A single platform rule: a predicate and the extractor it guards.
pub struct PlatformRule {
    pub name: &'static str,
    applies: fn(&RuleContext<'_>) -> bool,
    extract: fn(&RuleContext<'_>) -> Identity,
}

impl PlatformRule {
    pub fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        (self.applies)(ctx)
    }
}

/// All platform rules, in precedence order.
pub static PLATFORM_RULES: &[PlatformRule] = &[
    PlatformRule {
        name: "subdomain",
        applies: |ctx| {
            SUBDOMAIN_HANDLE_DOMAINS.contains(&ctx.domain)
                && !ctx.subdomain.is_empty()
                && ctx.subdomain != "www"
        },
        extract: |ctx| {
            let handle = ctx.subdomain.strip_prefix("www.").unwrap_or(ctx.subdomain);
            Identity::handle(handle)
        },
    },
    PlatformRule {
        name: "youtube-channel",
        applies: |ctx| {
            ctx.domain == "youtube.com"
                && ctx.segments.len() > 1
                && matches!(ctx.segment(0), Some("c" | "user" | "channel"))
        },
        extract: |ctx| match (ctx.segment(0), ctx.segment(1)) {
            (Some("channel"), id) => Identity::provider_id(id.map(str::to_string)),
            (_, Some(handle)) => Identity::handle(handle),
            _ => Identity::default(),
        },
    },
    PlatformRule {
        name: "first-segment",
        applies: |ctx| handle_regex(ctx.domain).is_some() && !ctx.segments.is_empty(),
        extract: first_segment,
    },
    PlatformRule {
        name: "flickr",
        applies: |ctx| ctx.nested_under("flickr.com", "people"),
        extract: second_segment,
    },
    PlatformRule {
        name: "linkedin",
        applies: |ctx| ctx.nested_under("linkedin.com", "in"),
        extract: second_segment,
    },
    PlatformRule {
        name: "reddit",
        applies: |ctx| ctx.nested_under("reddit.com", "user"),
        extract: second_segment,
    },
    PlatformRule {
        name: "snapchat",
        applies: |ctx| ctx.nested_under("snapchat.com", "add"),
        extract: second_segment,
    },
    PlatformRule {
        name: "paypal",
        applies: |ctx| ctx.nested_under("paypal.com", "paypalme"),
        extract: second_segment,
    },
    PlatformRule {
        name: "facebook",
        applies: |ctx| ctx.domain == "facebook.com" && !ctx.segments.is_empty(),
        extract: |ctx| match (ctx.segment(0), ctx.segment(1)) {
            (Some("profile.php"), _) => Identity::provider_id(query_value(ctx.url, "id")),
            (Some("pages"), Some(page)) => Identity::handle(page),
            (Some(first), _) => Identity::handle(first),
            _ => Identity::default(),
        },
    },
];

/// The first path segment, minus one leading `@`, if it fits the domain's handle pattern.
fn first_segment(ctx: &RuleContext<'_>) -> Identity {
    let first = ctx.segment(0).unwrap_or_default();
    let candidate = first.strip_prefix('@').unwrap_or(first);
    match handle_regex(ctx.domain) {
        Some(re) if re.is_match(candidate) => Identity::handle(candidate),
        _ => {
            debug!("First segment {:?} does not match the {} handle pattern", candidate, ctx.domain);
            Identity::default()
        }
    }
}

fn second_segment(ctx: &RuleContext<'_>) -> Identity {
    ctx.segment(1).map(Identity::handle).unwrap_or_default()
}

/// Run the first matching platform rule and validate the handle it proposes.
pub fn identify(ctx: &RuleContext<'_>) -> Identity {
    let Some(rule) = PLATFORM_RULES.iter().find(|rule| rule.applies(ctx)) else {
        return Identity::default();
    };

    let mut identity = (rule.extract)(ctx);
    if let Some(candidate) = identity.handle.take() {
        if accept_handle(ctx.domain, &candidate) {
            identity.handle = Some(candidate);
        } else {
            debug!("Rule {} rejected handle candidate {:?} on {}", rule.name, candidate, ctx.domain);
        }
    }
    identity
}
