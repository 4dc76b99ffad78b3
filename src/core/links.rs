// Navigation target for a transition link click.

/// The URL to navigate to after the fade-out, or `None` when the link has no
/// usable `href` and should keep its default behavior.
#[inline]
pub fn transition_target(href: Option<String>) -> Option<String> {
    href.filter(|h| !h.is_empty())
}
