use thiserror::Error;
use url::Url;

use crate::prompter::PrompterKind;
use crate::provider::{Provider, RequiredField};

use super::IdpAccount;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("{0} empty in idp account")]
    MissingField(&'static str),

    #[error("URL parse failed for '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unknown prompter '{0}'")]
    UnknownPrompter(String),
}

impl IdpAccount {
    /// Checks the settings the configured provider needs. Stops at the first problem.
    ///
    /// Provider-specific fields are checked before the general ones, so an account with
    /// several gaps reports the provider-specific one.
    pub fn validate(&self) -> Result<(), AccountError> {
        let provider = Provider::parse(&self.provider);

        if let Some(provider) = provider {
            for &field in provider.required_fields() {
                if self.required_value(field).is_empty() {
                    return Err(AccountError::MissingField(field.label()));
                }
            }
        }

        if self.url.is_empty() {
            return Err(AccountError::MissingField("URL"));
        }
        check_url(&self.url)?;

        if self.provider.is_empty() {
            return Err(AccountError::MissingField("provider"));
        }

        // Providers outside the catalogue get no provider-specific checks but still need MFA.
        let requires_mfa = provider.map_or(true, Provider::requires_mfa);
        if requires_mfa && self.mfa.is_empty() {
            return Err(AccountError::MissingField("MFA"));
        }

        if self.profile.is_empty() {
            return Err(AccountError::MissingField("profile"));
        }

        PrompterKind::from_name(&self.prompter)?;

        Ok(())
    }

    fn required_value(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::AppId => &self.app_id,
            RequiredField::Subdomain => &self.subdomain,
            RequiredField::ResourceId => &self.resource_id,
        }
    }
}

fn check_url(raw: &str) -> Result<(), AccountError> {
    // The URL parser silently strips tabs and newlines; reject every control character instead.
    if raw.chars().any(|c| c.is_ascii_control()) {
        return Err(AccountError::InvalidUrl {
            url: raw.escape_default().to_string(),
            reason: "invalid control character in URL".to_string(),
        });
    }

    let invalid = |e: url::ParseError| AccountError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    };

    match Url::parse(raw) {
        Ok(_) => Ok(()),
        // Scheme-less values such as `idp.example.com` are relative references, which are
        // syntactically fine. Resolve them against a placeholder to check the rest.
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("http://localhost/").map_err(invalid)?;
            base.join(raw).map(|_| ()).map_err(invalid)
        }
        Err(e) => Err(invalid(e)),
    }
}
