use anyhow::{Context, Result};

use crate::prompter::{ProcessPrompters, PrompterRegistry};
use crate::provider::Provider;
use crate::storage::ProfileStore;

use super::args::ConfigureArgs;

pub fn cmd_configure(config: Option<&str>, idp_account: &str, args: ConfigureArgs) -> Result<()> {
    let store = ProfileStore::new(config)?;
    configure(&store, idp_account, args, ProcessPrompters::global())
}

fn configure(
    store: &ProfileStore,
    idp_account: &str,
    args: ConfigureArgs,
    prompters: &dyn PrompterRegistry,
) -> Result<()> {
    let mut account = store
        .load(idp_account)
        .with_context(|| format!("Failed to load IDP account '{}'", idp_account))?;

    args.apply(&mut account);

    store
        .save(idp_account, &account)
        .with_context(|| format!("Failed to save IDP account '{}'", idp_account))?;

    prompters.activate(&account.prompter)?;

    eprintln!("Configuration saved for IDP account: {}", idp_account);
    if Provider::parse(&account.provider).is_none() {
        eprintln!(
            "  Note:     provider '{}' is not built in; only the general checks were applied",
            account.provider
        );
    }
    eprintln!("  File:     {}", store.path().display());
    eprintln!("  Prompter: {}", prompters.active());
    println!("{}", account);

    Ok(())
}

pub fn cmd_show(config: Option<&str>, idp_account: &str, json: bool) -> Result<()> {
    let store = ProfileStore::new(config)?;
    let account = store.load_existing(idp_account)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&account)?);
    } else {
        println!("{}", account);
    }

    Ok(())
}

pub fn cmd_list(config: Option<&str>) -> Result<()> {
    let store = ProfileStore::new(config)?;
    let names = store.list()?;

    if names.is_empty() {
        eprintln!("No IDP accounts configured. Run `fedcfg configure` to get started.");
        return Ok(());
    }

    for name in names {
        let account = store.load(&name)?;
        let provider = if account.provider.is_empty() {
            "?"
        } else {
            account.provider.as_str()
        };
        println!("{} ({}, profile {})", name, provider, account.profile);
    }

    Ok(())
}

pub fn cmd_providers() -> Result<()> {
    for provider in Provider::ALL {
        let required: Vec<&str> = provider
            .required_fields()
            .iter()
            .map(|field| field.label())
            .collect();

        let mut notes = Vec::new();
        if !required.is_empty() {
            notes.push(format!("requires {}", required.join(", ")));
        }
        if !provider.requires_mfa() {
            notes.push("MFA handled in browser".to_string());
        }

        if notes.is_empty() {
            println!("{}", provider);
        } else {
            println!("{} ({})", provider, notes.join("; "));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompter::PrompterKind;
    use crate::storage::StoreError;

    fn store_in(dir: &tempfile::TempDir) -> ProfileStore {
        let path = dir.path().join("fedcfg.ini");
        ProfileStore::new(Some(path.to_str().unwrap())).unwrap()
    }

    fn onelogin_args() -> ConfigureArgs {
        ConfigureArgs {
            provider: Some("OneLogin".to_string()),
            url: Some("https://example.onelogin.com".to_string()),
            mfa: Some("push".to_string()),
            app_id: Some("123".to_string()),
            subdomain: Some("acme".to_string()),
            prompter: Some("console".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn configure_saves_and_activates_prompter() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let prompters = ProcessPrompters::default();

        configure(&store, "acme", onelogin_args(), &prompters).unwrap();

        let account = store.load_existing("acme").unwrap();
        assert_eq!(account.provider, "OneLogin");
        assert_eq!(account.subdomain, "acme");
        assert_eq!(prompters.active(), PrompterKind::Console);
    }

    #[test]
    fn configure_updates_existing_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let prompters = ProcessPrompters::default();
        configure(&store, "acme", onelogin_args(), &prompters).unwrap();

        let update = ConfigureArgs {
            region: Some("eu-central-1".to_string()),
            ..Default::default()
        };
        configure(&store, "acme", update, &prompters).unwrap();

        let account = store.load("acme").unwrap();
        assert_eq!(account.region, "eu-central-1");
        assert_eq!(account.app_id, "123");
    }

    #[test]
    fn configure_rejects_incomplete_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let prompters = ProcessPrompters::default();

        let mut args = onelogin_args();
        args.subdomain = None;
        args.prompter = None;

        let err = configure(&store, "acme", args, &prompters).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::Validation(_))
        ));
        assert!(format!("{:#}", err).contains("subdomain empty in idp account"));
        assert!(!store.path().exists());
        assert_eq!(prompters.active(), PrompterKind::Default);
    }

    #[test]
    fn show_requires_existing_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fedcfg.ini");

        let err = cmd_show(path.to_str(), "missing", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn configure_accepts_provider_outside_catalogue() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let prompters = ProcessPrompters::default();

        let args = ConfigureArgs {
            provider: Some("Authentik".to_string()),
            url: Some("auth.example.com/application/saml/aws".to_string()),
            mfa: Some("Auto".to_string()),
            ..Default::default()
        };
        configure(&store, "lab", args, &prompters).unwrap();

        assert_eq!(store.load_existing("lab").unwrap().provider, "Authentik");
    }

    #[test]
    fn configure_rejects_empty_account_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let prompters = ProcessPrompters::default();

        let err = configure(&store, "", onelogin_args(), &prompters).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::InvalidProfileName(_))
        ));
        assert!(!store.path().exists());
    }
}
