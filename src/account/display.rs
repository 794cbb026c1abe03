use std::fmt;

use crate::provider::Provider;

use super::IdpAccount;

impl fmt::Display for IdpAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("account {")?;

        match Provider::parse(&self.provider) {
            Some(Provider::OneLogin) => {
                write!(f, "\n  AppID: {}", self.app_id)?;
                write!(f, "\n  Subdomain: {}", self.subdomain)?;
            }
            Some(Provider::F5Apm) => write!(f, "\n  ResourceID: {}", self.resource_id)?,
            Some(Provider::AzureAd) => write!(f, "\n  AppID: {}", self.app_id)?,
            Some(Provider::Okta) => {
                write!(f, "\n  DisableSessions: {}", self.disable_sessions)?;
                write!(f, "\n  DisableRememberDevice: {}", self.disable_remember_device)?;
            }
            _ => {}
        }

        writeln!(f)?;
        writeln!(f, "  URL: {}", self.url)?;
        writeln!(f, "  Username: {}", self.username)?;
        writeln!(f, "  Provider: {}", self.provider)?;
        writeln!(f, "  MFA: {}", self.mfa)?;
        writeln!(f, "  SkipVerify: {}", self.skip_verify)?;
        writeln!(f, "  AmazonWebservicesURN: {}", self.amazon_webservices_urn)?;
        writeln!(f, "  SessionDuration: {}", self.session_duration)?;
        writeln!(f, "  Profile: {}", self.profile)?;
        writeln!(f, "  RoleARN: {}", self.role_arn)?;
        writeln!(f, "  Region: {}", self.region)?;
        f.write_str("}")
    }
}
