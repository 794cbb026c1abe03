use clap::Args;

use crate::account::IdpAccount;

/// Settings accepted by `configure`. Anything left out keeps its stored value.
#[derive(Debug, Default, Args)]
pub struct ConfigureArgs {
    /// Identity provider (e.g. Okta, OneLogin, AzureAD; see `fedcfg providers`)
    #[arg(long)]
    pub provider: Option<String>,

    /// Login URL of the identity provider
    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    /// MFA method (e.g. Auto, PUSH, TOTP)
    #[arg(long)]
    pub mfa: Option<String>,

    /// Source IP presented to OneLogin MFA
    #[arg(long)]
    pub mfa_ip_address: Option<String>,

    /// Application ID (OneLogin, AzureAD)
    #[arg(long)]
    pub app_id: Option<String>,

    /// Subdomain (OneLogin)
    #[arg(long)]
    pub subdomain: Option<String>,

    /// Resource ID (F5APM)
    #[arg(long)]
    pub resource_id: Option<String>,

    /// AWS CLI profile the credentials are saved under
    #[arg(long)]
    pub profile: Option<String>,

    /// ARN of the role to assume
    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub region: Option<String>,

    /// Session duration in seconds
    #[arg(long)]
    pub session_duration: Option<u32>,

    /// Service provider URN presented to AWS
    #[arg(long)]
    pub aws_urn: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub skip_verify: Option<bool>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u32>,

    #[arg(long)]
    pub policy_file: Option<String>,

    /// Comma separated policy ARNs
    #[arg(long)]
    pub policy_arns: Option<String>,

    #[arg(long)]
    pub http_attempts_count: Option<String>,

    #[arg(long)]
    pub http_retry_delay: Option<String>,

    /// AWS credentials file to write to
    #[arg(long)]
    pub credentials_file: Option<String>,

    /// Cache the SAML response between logins
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub cache_saml: Option<bool>,

    #[arg(long)]
    pub cache_file: Option<String>,

    #[arg(long)]
    pub target_url: Option<String>,

    /// Do not remember this device (Okta)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub disable_remember_device: Option<bool>,

    /// Do not reuse Okta sessions (Okta)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub disable_sessions: Option<bool>,

    /// Browser to drive (Browser)
    #[arg(long)]
    pub browser_type: Option<String>,

    #[arg(long)]
    pub browser_executable_path: Option<String>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub browser_autofill: Option<bool>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub download_browser_driver: Option<bool>,

    #[arg(long)]
    pub browser_driver_dir: Option<String>,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub headless: Option<bool>,

    /// Prompter used for credentials and MFA codes
    #[arg(long)]
    pub prompter: Option<String>,

    /// Error message shown by KeyCloak on failed login
    #[arg(long)]
    pub kc_auth_error_message: Option<String>,

    /// Element holding KeyCloak's login error
    #[arg(long)]
    pub kc_auth_error_element: Option<String>,

    /// Identity broker alias (KeyCloak)
    #[arg(long)]
    pub kc_broker: Option<String>,
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl ConfigureArgs {
    pub fn apply(self, account: &mut IdpAccount) {
        set(&mut account.provider, self.provider);
        set(&mut account.url, self.url);
        set(&mut account.username, self.username);
        set(&mut account.mfa, self.mfa);
        set(&mut account.mfa_ip_address, self.mfa_ip_address);
        set(&mut account.app_id, self.app_id);
        set(&mut account.subdomain, self.subdomain);
        set(&mut account.resource_id, self.resource_id);
        set(&mut account.profile, self.profile);
        set(&mut account.role_arn, self.role);
        set(&mut account.region, self.region);
        set(&mut account.session_duration, self.session_duration);
        set(&mut account.amazon_webservices_urn, self.aws_urn);
        set(&mut account.skip_verify, self.skip_verify);
        set(&mut account.timeout, self.timeout);
        set(&mut account.policy_file, self.policy_file);
        set(&mut account.policy_arns, self.policy_arns);
        set(&mut account.http_attempts_count, self.http_attempts_count);
        set(&mut account.http_retry_delay, self.http_retry_delay);
        set(&mut account.credentials_file, self.credentials_file);
        set(&mut account.saml_cache, self.cache_saml);
        set(&mut account.saml_cache_file, self.cache_file);
        set(&mut account.target_url, self.target_url);
        set(&mut account.disable_remember_device, self.disable_remember_device);
        set(&mut account.disable_sessions, self.disable_sessions);
        set(&mut account.browser_type, self.browser_type);
        set(&mut account.browser_executable_path, self.browser_executable_path);
        set(&mut account.browser_autofill, self.browser_autofill);
        set(&mut account.download_browser_driver, self.download_browser_driver);
        set(&mut account.browser_driver_dir, self.browser_driver_dir);
        set(&mut account.headless, self.headless);
        set(&mut account.prompter, self.prompter);
        set(&mut account.kc_auth_error_message, self.kc_auth_error_message);
        set(&mut account.kc_auth_error_element, self.kc_auth_error_element);
        set(&mut account.kc_broker, self.kc_broker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_only_touches_supplied_settings() {
        let mut account = IdpAccount::new();
        account.region = "us-east-1".to_string();

        ConfigureArgs {
            provider: Some("Okta".to_string()),
            session_duration: Some(900),
            headless: Some(true),
            ..Default::default()
        }
        .apply(&mut account);

        assert_eq!(account.provider, "Okta");
        assert_eq!(account.session_duration, 900);
        assert!(account.headless);
        assert_eq!(account.region, "us-east-1");
        assert_eq!(account.profile, "saml");
    }

    #[test]
    fn apply_can_clear_a_setting() {
        let mut account = IdpAccount::new();
        account.role_arn = "arn:aws:iam::1:role/Old".to_string();

        ConfigureArgs {
            role: Some(String::new()),
            ..Default::default()
        }
        .apply(&mut account);

        assert!(account.role_arn.is_empty());
    }
}
