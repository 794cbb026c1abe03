use std::fmt;

/// Identity providers an account profile can federate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Akamai,
    AzureAd,
    Adfs,
    Adfs2,
    Auth0,
    Browser,
    F5Apm,
    GoogleApps,
    JumpCloud,
    KeyCloak,
    NetIq,
    Okta,
    OneLogin,
    Ping,
    PingOne,
    Psu,
    Shibboleth,
    ShibbolethEcp,
}

/// A provider-specific setting that must be filled in before the account is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    AppId,
    Subdomain,
    ResourceId,
}

impl RequiredField {
    /// Name used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::AppId => "app ID",
            RequiredField::Subdomain => "subdomain",
            RequiredField::ResourceId => "resource ID",
        }
    }
}

impl Provider {
    pub const ALL: [Provider; 18] = [
        Provider::Akamai,
        Provider::AzureAd,
        Provider::Adfs,
        Provider::Adfs2,
        Provider::Auth0,
        Provider::Browser,
        Provider::F5Apm,
        Provider::GoogleApps,
        Provider::JumpCloud,
        Provider::KeyCloak,
        Provider::NetIq,
        Provider::Okta,
        Provider::OneLogin,
        Provider::Ping,
        Provider::PingOne,
        Provider::Psu,
        Provider::Shibboleth,
        Provider::ShibbolethEcp,
    ];

    /// Looks up a provider by the exact name stored in the profile file.
    pub fn parse(name: &str) -> Option<Provider> {
        Provider::ALL.into_iter().find(|p| p.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Akamai => "Akamai",
            Provider::AzureAd => "AzureAD",
            Provider::Adfs => "ADFS",
            Provider::Adfs2 => "ADFS2",
            Provider::Auth0 => "Auth0",
            Provider::Browser => "Browser",
            Provider::F5Apm => "F5APM",
            Provider::GoogleApps => "GoogleApps",
            Provider::JumpCloud => "JumpCloud",
            Provider::KeyCloak => "KeyCloak",
            Provider::NetIq => "NetIQ",
            Provider::Okta => "Okta",
            Provider::OneLogin => "OneLogin",
            Provider::Ping => "Ping",
            Provider::PingOne => "PingOne",
            Provider::Psu => "PSU",
            Provider::Shibboleth => "Shibboleth",
            Provider::ShibbolethEcp => "ShibbolethECP",
        }
    }

    /// Settings this provider's login flow cannot do without, in the order they are checked.
    pub fn required_fields(self) -> &'static [RequiredField] {
        match self {
            Provider::OneLogin => &[RequiredField::AppId, RequiredField::Subdomain],
            Provider::AzureAd => &[RequiredField::AppId],
            Provider::F5Apm => &[RequiredField::ResourceId],
            _ => &[],
        }
    }

    /// The browser provider handles MFA interactively, so no method needs configuring.
    pub fn requires_mfa(self) -> bool {
        self != Provider::Browser
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
