//! Selection of the interactive prompter used to collect credentials and MFA codes.
//!
//! Checking a prompter name is pure ([`PrompterKind::from_name`]); making it the active
//! one for the process is a separate step through a [`PrompterRegistry`].

use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::account::AccountError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrompterKind {
    #[default]
    Default,
    Survey,
    Console,
    Pinentry,
}

impl PrompterKind {
    /// Resolves a configured prompter name. An empty name selects the default prompter.
    pub fn from_name(name: &str) -> Result<Self, AccountError> {
        match name {
            "" | "default" => Ok(PrompterKind::Default),
            "survey" => Ok(PrompterKind::Survey),
            "console" => Ok(PrompterKind::Console),
            "pinentry" => Ok(PrompterKind::Pinentry),
            other => Err(AccountError::UnknownPrompter(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrompterKind::Default => "default",
            PrompterKind::Survey => "survey",
            PrompterKind::Console => "console",
            PrompterKind::Pinentry => "pinentry",
        }
    }
}

impl fmt::Display for PrompterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait PrompterRegistry {
    /// Validates `name` and makes it the active prompter.
    fn activate(&self, name: &str) -> Result<PrompterKind, AccountError>;
    fn active(&self) -> PrompterKind;
}

/// Prompter selection shared by the whole process.
#[derive(Debug, Default)]
pub struct ProcessPrompters {
    active: RwLock<PrompterKind>,
}

impl ProcessPrompters {
    pub fn global() -> &'static ProcessPrompters {
        static PROMPTERS: OnceLock<ProcessPrompters> = OnceLock::new();
        PROMPTERS.get_or_init(ProcessPrompters::default)
    }
}

impl PrompterRegistry for ProcessPrompters {
    fn activate(&self, name: &str) -> Result<PrompterKind, AccountError> {
        let kind = PrompterKind::from_name(name)?;
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = kind;
        tracing::debug!(prompter = %kind, "prompter activated");
        Ok(kind)
    }

    fn active(&self) -> PrompterKind {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_default() {
        assert_eq!(PrompterKind::from_name(""), Ok(PrompterKind::Default));
        assert_eq!(PrompterKind::from_name("default"), Ok(PrompterKind::Default));
    }

    #[test]
    fn names_round_trip() {
        for kind in [
            PrompterKind::Default,
            PrompterKind::Survey,
            PrompterKind::Console,
            PrompterKind::Pinentry,
        ] {
            assert_eq!(PrompterKind::from_name(kind.as_str()), Ok(kind));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            PrompterKind::from_name("Survey"),
            Err(AccountError::UnknownPrompter("Survey".to_string()))
        );
    }

    #[test]
    fn activate_switches_active_prompter() {
        let registry = ProcessPrompters::default();
        assert_eq!(registry.active(), PrompterKind::Default);

        assert_eq!(registry.activate("console"), Ok(PrompterKind::Console));
        assert_eq!(registry.active(), PrompterKind::Console);
    }

    #[test]
    fn failed_activation_keeps_previous_prompter() {
        let registry = ProcessPrompters::default();
        registry.activate("pinentry").unwrap();

        assert!(registry.activate("nope").is_err());
        assert_eq!(registry.active(), PrompterKind::Pinentry);
    }
}
