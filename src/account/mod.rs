mod display;
mod validate;

pub use validate::AccountError;

use serde::Serialize;

/// Default location of the profile file.
pub const DEFAULT_CONFIG_PATH: &str = "~/.fedcfg";

/// URN presented when asserting identity to AWS. Only GovCloud needs a different one.
pub const DEFAULT_AMAZON_WEBSERVICES_URN: &str = "urn:amazon:webservices";

/// Session duration in seconds; AWS lets roles raise this to 12 hours.
pub const DEFAULT_SESSION_DURATION: u32 = 3600;

/// Name of the AWS CLI profile credentials are written to.
pub const DEFAULT_PROFILE: &str = "saml";

/// Settings for logging in to one identity provider, stored as a named section of the
/// profile file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdpAccount {
    /// Section name this account was loaded from. Never written as a key.
    pub name: String,
    pub app_id: String, // OneLogin, AzureAD
    pub url: String,
    pub username: String,
    pub provider: String,
    pub browser_type: String,
    pub browser_executable_path: String,
    pub browser_autofill: bool,
    pub mfa: String,
    pub mfa_ip_address: String, // OneLogin
    pub skip_verify: bool,
    pub timeout: u32,
    pub amazon_webservices_urn: String,
    pub session_duration: u32,
    pub profile: String,
    pub resource_id: String, // F5APM
    pub subdomain: String,   // OneLogin
    pub role_arn: String,
    pub policy_file: String,
    pub policy_arns: String,
    pub region: String,
    pub http_attempts_count: String,
    pub http_retry_delay: String,
    pub credentials_file: String,
    pub saml_cache: bool,
    pub saml_cache_file: String,
    pub target_url: String,
    pub disable_remember_device: bool, // Okta
    pub disable_sessions: bool,        // Okta
    pub download_browser_driver: bool,
    pub browser_driver_dir: String,
    pub headless: bool,
    pub prompter: String,
    pub kc_auth_error_message: String, // KeyCloak
    pub kc_auth_error_element: String, // KeyCloak
    pub kc_broker: String,             // KeyCloak
}

impl IdpAccount {
    /// An account with the URN, session duration and profile name pre-filled.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            app_id: String::new(),
            url: String::new(),
            username: String::new(),
            provider: String::new(),
            browser_type: String::new(),
            browser_executable_path: String::new(),
            browser_autofill: false,
            mfa: String::new(),
            mfa_ip_address: String::new(),
            skip_verify: false,
            timeout: 0,
            amazon_webservices_urn: DEFAULT_AMAZON_WEBSERVICES_URN.to_string(),
            session_duration: DEFAULT_SESSION_DURATION,
            profile: DEFAULT_PROFILE.to_string(),
            resource_id: String::new(),
            subdomain: String::new(),
            role_arn: String::new(),
            policy_file: String::new(),
            policy_arns: String::new(),
            region: String::new(),
            http_attempts_count: String::new(),
            http_retry_delay: String::new(),
            credentials_file: String::new(),
            saml_cache: false,
            saml_cache_file: String::new(),
            target_url: String::new(),
            disable_remember_device: false,
            disable_sessions: false,
            download_browser_driver: false,
            browser_driver_dir: String::new(),
            headless: false,
            prompter: String::new(),
            kc_auth_error_message: String::new(),
            kc_auth_error_element: String::new(),
            kc_broker: String::new(),
        }
    }
}

impl Default for IdpAccount {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_defaults() {
        let account = IdpAccount::new();
        assert_eq!(account.amazon_webservices_urn, "urn:amazon:webservices");
        assert_eq!(account.session_duration, 3600);
        assert_eq!(account.profile, "saml");
    }

    #[test]
    fn new_leaves_everything_else_empty() {
        let account = IdpAccount::new();
        assert!(account.name.is_empty());
        assert!(account.provider.is_empty());
        assert!(account.url.is_empty());
        assert!(account.mfa.is_empty());
        assert_eq!(account.timeout, 0);
        assert!(!account.skip_verify);
        assert!(!account.headless);
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(IdpAccount::default(), IdpAccount::new());
    }
}
