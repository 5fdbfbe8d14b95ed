//! `order` and `check` command implementations.

use std::collections::HashSet;
use std::path::PathBuf;

use colored::Colorize;
use ext_order::{ExtensionManager, ExtensionSet, ProviderPolicy};

use crate::error::{CliError, Result};

/// Load `manifests` in order into one manager.
///
/// The resolver settings come from the first manifest; `lenient` forces the
/// last-wins provider policy regardless.
pub fn load_manager(manifests: &[PathBuf], lenient: bool) -> Result<ExtensionManager> {
    let mut seen = HashSet::new();
    let mut sets = Vec::with_capacity(manifests.len());
    for path in manifests {
        if !seen.insert(path) {
            return Err(CliError::user(format!(
                "manifest '{}' was given more than once",
                path.display()
            )));
        }
        sets.push(ExtensionSet::load(path)?);
    }

    let mut config = sets.first().map(|set| set.resolver).unwrap_or_default();
    if lenient {
        config = config.with_providers(ProviderPolicy::LastWins);
    }

    let mut manager = ExtensionManager::with_config(config);
    for set in sets {
        manager.extend(set.extensions);
    }
    tracing::debug!(
        manifests = manifests.len(),
        extensions = manager.len(),
        policy = ?config.providers,
        "Registered extensions"
    );
    Ok(manager)
}

fn ordered_ids(manager: &ExtensionManager) -> Result<Vec<String>> {
    Ok(manager
        .order()?
        .into_iter()
        .filter_map(|ext| ext.id().map(str::to_string))
        .collect())
}

/// Handle `extorder order <manifests>... [--json]`
pub fn run_order(manifests: &[PathBuf], lenient: bool, json: bool) -> Result<()> {
    let manager = load_manager(manifests, lenient)?;
    let ids = ordered_ids(&manager)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
    } else {
        for id in ids {
            println!("{id}");
        }
    }
    Ok(())
}

/// Handle `extorder check <manifests>...`
pub fn run_check(manifests: &[PathBuf], lenient: bool) -> Result<()> {
    let manager = load_manager(manifests, lenient)?;
    let count = ordered_ids(&manager)?.len();
    println!(
        "{} ok ({} extensions)",
        "=>".green().bold(),
        count.to_string().cyan()
    );
    Ok(())
}
