use url::Url;

/// Address the shell opens when no deep link overrides it.
pub const CANONICAL_URL: &str = "https://shofyou.com";
/// Domain that keeps a navigation inside the embedded browser.
pub const CANONICAL_DOMAIN: &str = "shofyou.com";

/// How a URL is compared against the canonical domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainMatch {
    /// The raw URL string contains the domain anywhere.
    ///
    /// Matches hosts like `notshofyou.com` and query strings that mention the
    /// domain.
    #[default]
    Substring,
    /// The parsed host equals the domain or is a subdomain of it.
    HostSuffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Load inside the embedded browser.
    InApp,
    /// Stop the embedded load and open the URL in the system browser.
    HandOff,
}

impl NavigationDecision {
    /// Value returned to the browser's "should start load" hook.
    pub fn should_load(self) -> bool {
        matches!(self, NavigationDecision::InApp)
    }
}

/// Classifies navigation targets. Stateless: the same URL always yields the
/// same decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationGuard {
    domain: String,
    policy: DomainMatch,
}

impl NavigationGuard {
    pub fn new(domain: impl Into<String>, policy: DomainMatch) -> Self {
        Self {
            domain: domain.into(),
            policy,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn policy(&self) -> DomainMatch {
        self.policy
    }

    pub fn decide(&self, url: &str) -> NavigationDecision {
        if self.is_in_app(url) {
            NavigationDecision::InApp
        } else {
            NavigationDecision::HandOff
        }
    }

    pub fn is_in_app(&self, url: &str) -> bool {
        if self.domain.is_empty() {
            return false;
        }
        match self.policy {
            DomainMatch::Substring => url.contains(self.domain.as_str()),
            DomainMatch::HostSuffix => host_matches(url, &self.domain),
        }
    }
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self::new(CANONICAL_DOMAIN, DomainMatch::Substring)
    }
}

fn host_matches(url: &str, domain: &str) -> bool {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let domain = domain.trim_end_matches('.').to_ascii_lowercase();
    host == domain
        || host
            .strip_suffix(domain.as_str())
            .is_some_and(|prefix| prefix.ends_with('.'))
}
