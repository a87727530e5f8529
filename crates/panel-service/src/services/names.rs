//! Player name lookups for decorating listings

use std::collections::HashMap;
use tracing::{instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct NameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NameService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Identifier to player name for the identifiers found under `keys` of
    /// every entry
    pub async fn player_name_map<T>(
        &self,
        entries: &[T],
        keys: &[fn(&T) -> &str],
    ) -> ServiceResult<HashMap<String, String>> {
        let identifiers = distinct_identifiers(entries, keys);
        self.names_for(&identifiers).await
    }

    /// Names for the given identifiers, read through the name cache
    #[instrument(skip(self, identifiers), fields(count = identifiers.len()))]
    pub async fn names_for(&self, identifiers: &[String]) -> ServiceResult<HashMap<String, String>> {
        if identifiers.is_empty() {
            return Ok(HashMap::new());
        }

        let store = self.ctx.player_name_store();
        let mut names = store.get_many(identifiers).await.unwrap_or_else(|e| {
            warn!(error = %e, "Player name cache read failed");
            HashMap::new()
        });

        let missing: Vec<String> = identifiers
            .iter()
            .filter(|identifier| !names.contains_key(*identifier))
            .cloned()
            .collect();

        if missing.is_empty() {
            return Ok(names);
        }

        let fetched: HashMap<String, String> = self
            .ctx
            .player_repo()
            .find_names(&missing)
            .await?
            .into_iter()
            .collect();

        if let Err(e) = store.put_many(&fetched).await {
            warn!(error = %e, "Player name cache write failed");
        }

        names.extend(fetched);
        Ok(names)
    }
}

/// Distinct values under the given keys, in first-seen order
pub fn distinct_identifiers<T>(entries: &[T], keys: &[fn(&T) -> &str]) -> Vec<String> {
    let mut identifiers: Vec<String> = Vec::new();

    for entry in entries {
        for key in keys {
            let identifier = key(entry);
            if !identifier.is_empty() && !identifiers.iter().any(|known| known == identifier) {
                identifiers.push(identifier.to_string());
            }
        }
    }

    identifiers
}
