use std::fs;
use std::path::{Path, PathBuf};

use ini::{EscapePolicy, Ini, WriteOption};

use crate::account::{IdpAccount, DEFAULT_CONFIG_PATH};

use super::loose::{self, Comments};
use super::{schema, StoreError};

/// Named account profiles kept as sections of a single INI file.
///
/// Nothing is cached: every call re-reads the file, and a save rewrites all of it.
pub struct ProfileStore {
    config_path: PathBuf,
}

impl ProfileStore {
    /// Resolves the profile file location. `None` or an empty string selects the default
    /// path; a leading `~` is expanded to the home directory.
    pub fn new(config_file: Option<&str>) -> Result<Self, StoreError> {
        let config_file = match config_file {
            Some(path) if !path.is_empty() => path,
            _ => DEFAULT_CONFIG_PATH,
        };

        Ok(Self {
            config_path: expand_home(config_file, dirs::home_dir())?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Validates `account` and writes it as section `name`, replacing any previous version.
    /// The keys and values of other sections are carried over untouched.
    ///
    /// The whole file is rewritten, so comments anywhere in it, including those inside other
    /// sections, are not preserved. Lines the loose reader cannot make sense of are dropped too.
    pub fn save(&self, name: &str, account: &IdpAccount) -> Result<(), StoreError> {
        check_profile_name(name)?;
        account.validate().map_err(StoreError::Validation)?;
        let entries = schema::entries(account)?;

        let mut cfg = loose::load(&self.config_path, Comments::Keep)?;

        cfg.delete(Some(name));
        {
            let mut section = cfg.with_section(Some(name));
            for (key, value) in entries {
                section.set(key, value);
            }
        }

        self.write(&cfg)?;
        tracing::debug!(profile = name, path = %self.config_path.display(), "saved account");
        Ok(())
    }

    /// Loads section `name` over a default account. A missing section yields the defaults.
    pub fn load(&self, name: &str) -> Result<IdpAccount, StoreError> {
        let cfg = loose::load(&self.config_path, Comments::StripInline)?;
        Ok(read_account(name, &cfg))
    }

    /// Like [`load`](Self::load), but a missing section is [`StoreError::NotFound`].
    pub fn load_existing(&self, name: &str) -> Result<IdpAccount, StoreError> {
        let cfg = loose::load(&self.config_path, Comments::StripInline)?;
        if cfg.section(Some(name)).is_none() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        Ok(read_account(name, &cfg))
    }

    /// Names of every section in the file, in file order.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let cfg = loose::load(&self.config_path, Comments::StripInline)?;
        let mut names: Vec<String> = Vec::new();
        for name in cfg.sections().flatten() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn write(&self, cfg: &Ini) -> Result<(), StoreError> {
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.config_path.clone(),
            source,
        };

        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let options = WriteOption {
            escape_policy: EscapePolicy::Nothing,
            ..WriteOption::default()
        };
        let mut contents = Vec::new();
        cfg.write_to_opt(&mut contents, options).map_err(write_err)?;
        fs::write(&self.config_path, contents).map_err(write_err)?;
        Ok(())
    }
}

/// Section names must read back as the same header: non-empty, without brackets, control
/// characters or surrounding whitespace.
fn check_profile_name(name: &str) -> Result<(), StoreError> {
    let valid = !name.is_empty()
        && name.trim() == name
        && !name.chars().any(|c| c == '[' || c == ']' || c.is_control());
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidProfileName(name.escape_default().to_string()))
    }
}

fn read_account(name: &str, cfg: &Ini) -> IdpAccount {
    let mut account = IdpAccount::new();

    match cfg.section(Some(name)) {
        Some(section) => schema::overlay(&mut account, section),
        None => tracing::debug!(profile = name, "no section for account, using defaults"),
    }

    // The section name is the account's identity; it is never stored as a key.
    account.name = name.to_string();
    account
}

fn expand_home(path: &str, home: Option<PathBuf>) -> Result<PathBuf, StoreError> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };

    let rest = if rest.is_empty() {
        rest
    } else if let Some(rest) = rest.strip_prefix(|c: char| c == '/' || c == '\\') {
        rest
    } else {
        return Err(StoreError::PathResolution(format!(
            "cannot expand user-specific home directory in '{path}'"
        )));
    };

    let home = home.ok_or_else(|| {
        StoreError::PathResolution("could not determine home directory".to_string())
    })?;

    Ok(if rest.is_empty() { home } else { home.join(rest) })
}
