//! The on-disk schema of an account section: each record field paired with its key.

use ini::Properties;
use thiserror::Error;

use crate::account::IdpAccount;

use super::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Flag(bool),
    Number(u32),
}

impl Value {
    fn is_unset(&self) -> bool {
        match self {
            Value::Text(s) => s.is_empty(),
            Value::Flag(b) => !b,
            Value::Number(n) => *n == 0,
        }
    }

    fn render(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Flag(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected {expected}, found '{found}'")]
pub struct InvalidValue {
    expected: &'static str,
    found: String,
}

pub struct Field {
    pub key: &'static str,
    /// Left out of the file entirely while unset.
    pub omit_empty: bool,
    read: fn(&IdpAccount) -> Value,
    write: fn(&mut IdpAccount, &str) -> Result<(), InvalidValue>,
}

impl Field {
    pub fn read(&self, account: &IdpAccount) -> Value {
        (self.read)(account)
    }

    pub fn write(&self, account: &mut IdpAccount, raw: &str) -> Result<(), InvalidValue> {
        (self.write)(account, raw)
    }
}

macro_rules! text {
    ($key:literal, $field:ident, $omit:literal) => {
        Field {
            key: $key,
            omit_empty: $omit,
            read: |account| Value::Text(account.$field.clone()),
            write: |account, raw| {
                account.$field = raw.to_string();
                Ok(())
            },
        }
    };
}

macro_rules! flag {
    ($key:literal, $field:ident, $omit:literal) => {
        Field {
            key: $key,
            omit_empty: $omit,
            read: |account| Value::Flag(account.$field),
            write: |account, raw| {
                if let Some(value) = parse_flag(raw)? {
                    account.$field = value;
                }
                Ok(())
            },
        }
    };
}

macro_rules! number {
    ($key:literal, $field:ident, $omit:literal) => {
        Field {
            key: $key,
            omit_empty: $omit,
            read: |account| Value::Number(account.$field),
            write: |account, raw| {
                if let Some(value) = parse_number(raw)? {
                    account.$field = value;
                }
                Ok(())
            },
        }
    };
}

/// Every persisted field, in the order keys are written.
pub static FIELDS: &[Field] = &[
    text!("app_id", app_id, false),
    text!("url", url, false),
    text!("username", username, false),
    text!("provider", provider, false),
    text!("browser_type", browser_type, true),
    text!("browser_executable_path", browser_executable_path, true),
    flag!("browser_autofill", browser_autofill, true),
    text!("mfa", mfa, false),
    text!("mfa_ip_address", mfa_ip_address, false),
    flag!("skip_verify", skip_verify, false),
    number!("timeout", timeout, false),
    text!("aws_urn", amazon_webservices_urn, false),
    number!("aws_session_duration", session_duration, false),
    text!("aws_profile", profile, false),
    text!("resource_id", resource_id, false),
    text!("subdomain", subdomain, false),
    text!("role_arn", role_arn, false),
    text!("policy_file", policy_file, false),
    text!("policy_arn_list", policy_arns, false),
    text!("region", region, false),
    text!("http_attempts_count", http_attempts_count, false),
    text!("http_retry_delay", http_retry_delay, false),
    text!("credentials_file", credentials_file, false),
    flag!("saml_cache", saml_cache, false),
    text!("saml_cache_file", saml_cache_file, false),
    text!("target_url", target_url, false),
    flag!("disable_remember_device", disable_remember_device, false),
    flag!("disable_sessions", disable_sessions, false),
    flag!("download_browser_driver", download_browser_driver, false),
    text!("browser_driver_dir", browser_driver_dir, true),
    flag!("headless", headless, false),
    text!("prompter", prompter, false),
    text!("kc_auth_error_message", kc_auth_error_message, true),
    text!("kc_auth_error_element", kc_auth_error_element, true),
    text!("kc_broker", kc_broker, false),
];

/// Key/value pairs to write for `account`, skipping unset `omit_empty` fields.
///
/// Values that would otherwise be trimmed or cut at an inline comment on the way back in are
/// wrapped in double quotes. Line breaks and other control characters cannot be stored.
pub fn entries(account: &IdpAccount) -> Result<Vec<(&'static str, String)>, StoreError> {
    let mut out = Vec::with_capacity(FIELDS.len());
    for field in FIELDS {
        let value = field.read(account);
        if field.omit_empty && value.is_unset() {
            continue;
        }
        let rendered = value.render();
        if rendered.chars().any(|c| c.is_control() && c != '\t') {
            return Err(StoreError::UnsupportedValue { key: field.key });
        }
        out.push((field.key, quote(rendered)));
    }
    Ok(out)
}

/// Copies the keys present in `section` onto `account`. Absent keys keep their current value,
/// and values that do not parse are skipped.
pub fn overlay(account: &mut IdpAccount, section: &Properties) {
    for field in FIELDS {
        let Some(raw) = section.get(field.key) else {
            continue;
        };
        if let Err(e) = field.write(account, unquote(raw)) {
            tracing::warn!(key = field.key, error = %e, "ignoring invalid value in profile file");
        }
    }
}

fn needs_quotes(value: &str) -> bool {
    if value.starts_with('"')
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
    {
        return true;
    }
    // `#` and `;` open a comment at the start of a value or after whitespace.
    value.char_indices().any(|(pos, c)| {
        (c == '#' || c == ';') && (pos == 0 || value[..pos].ends_with(char::is_whitespace))
    })
}

fn quote(value: String) -> String {
    if needs_quotes(&value) {
        format!("\"{value}\"")
    } else {
        value
    }
}

/// Drops one pair of surrounding double quotes. Nothing inside is unescaped.
fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(raw)
}

fn parse_flag(raw: &str) -> Result<Option<bool>, InvalidValue> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "n" | "off" => Ok(Some(false)),
        _ => Err(InvalidValue {
            expected: "a boolean",
            found: raw.to_string(),
        }),
    }
}

fn parse_number(raw: &str) -> Result<Option<u32>, InvalidValue> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| InvalidValue {
        expected: "a non-negative integer",
        found: raw.to_string(),
    })
}
