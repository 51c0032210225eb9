/*!
 * Session-scoped translation cache.
 *
 * Holds the locale table for one client session. The table is acquired
 * lazily on first use and at most once per session, regardless of outcome;
 * concurrent first-time callers share a single in-flight fetch.
 */

use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;
use tokio::sync::OnceCell;

use super::fetcher::LangFetcher;
use super::table::TranslationTable;
use crate::encoding::unescape_legacy;
use crate::objects::{RawSysVar, SysVar, Translatable};

/// Translation cache owned by a client session
#[derive(Debug)]
pub struct TranslationCache {
    /// Whether translation is applied at all
    enabled: bool,

    /// Source of the language asset
    fetcher: Arc<dyn LangFetcher>,

    /// The table, settled at most once per session
    table: OnceCell<TranslationTable>,
}

impl TranslationCache {
    /// Create a cache around the given asset source.
    ///
    /// A disabled cache is born settled with an empty table and never
    /// performs a fetch.
    pub fn new(enabled: bool, fetcher: Arc<dyn LangFetcher>) -> Self {
        let table = if enabled {
            OnceCell::new()
        } else {
            OnceCell::new_with(Some(TranslationTable::default()))
        };
        Self {
            enabled,
            fetcher,
            table,
        }
    }

    /// Whether translation is applied by this cache
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the table has settled (fetch finished, or translation off)
    pub fn is_ready(&self) -> bool {
        self.table.initialized()
    }

    /// Make sure the table is settled, acquiring it on first use.
    ///
    /// Concurrent first-time callers all join the same fetch and observe
    /// the same resulting table. A failed fetch settles to an empty table
    /// instead of surfacing an error; localized names are an enhancement,
    /// not a correctness requirement.
    pub async fn ensure_ready(&self) -> &TranslationTable {
        self.table
            .get_or_init(|| async {
                match self.fetcher.fetch().await {
                    Ok(asset) => {
                        let table = TranslationTable::parse(&asset);
                        debug!("loaded {} translation entries", table.len());
                        table
                    }
                    Err(err) => {
                        warn!("translation asset unavailable, continuing untranslated: {}", err);
                        TranslationTable::default()
                    }
                }
            })
            .await
    }

    /// Resolve a symbolic key to its display string.
    ///
    /// The optional `${...}` wrapper is stripped for the lookup only;
    /// unknown keys come back unchanged, wrapper included. Identity when
    /// translation is disabled or the table has not settled yet.
    pub fn translate(&self, key: &str) -> String {
        if !self.enabled {
            return key.to_string();
        }
        let Some(table) = self.table.get() else {
            return key.to_string();
        };
        let lookup = key
            .strip_prefix("${")
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(key);
        match table.get(lookup) {
            Some(value) => value.to_string(),
            None => key.to_string(),
        }
    }

    /// Rewrite the display fields of a batch of records in place:
    /// names are translated, descriptions are escape-decoded and then
    /// translated. No-op when translation is disabled.
    pub fn apply_to_names<'a, T, I>(&self, records: I)
    where
        T: Translatable + 'a,
        I: IntoIterator<Item = &'a mut T>,
    {
        if !self.enabled {
            return;
        }
        for record in records {
            let name = self.translate(record.name_mut());
            *record.name_mut() = name;
            if let Some(info) = record.info_mut() {
                let translated = self.translate(&unescape_legacy(info));
                *info = translated;
            }
        }
    }

    /// Element-wise translation of an enum value list, in place.
    /// No-op when translation is disabled.
    pub fn apply_to_enum(&self, values: &mut [String]) {
        if !self.enabled {
            return;
        }
        for value in values.iter_mut() {
            let translated = self.translate(value);
            *value = translated;
        }
    }

    /// Post-process a system variable record off the wire.
    ///
    /// The name is always escape-decoded — system variable names are user
    /// text, not symbolic keys — and string-typed values are decoded too.
    /// An enum field serialized as `""` becomes an empty sequence, never a
    /// one-element sequence holding an empty string; a non-empty one is
    /// split on `;`, each element decoded, then translated.
    pub fn decode_variable(&self, raw: RawSysVar) -> SysVar {
        let name = self.translate(&unescape_legacy(&raw.name));
        let val = match (raw.var_type.as_str(), raw.val) {
            ("string", Value::String(s)) => Value::String(unescape_legacy(&s)),
            (_, other) => other,
        };
        let value_list = if raw.value_list.is_empty() {
            Vec::new()
        } else {
            let mut items: Vec<String> =
                raw.value_list.split(';').map(unescape_legacy).collect();
            self.apply_to_enum(&mut items);
            items
        };
        let info = raw
            .info
            .map(|info| self.translate(&unescape_legacy(&info)));
        SysVar {
            id: raw.id,
            name,
            var_type: raw.var_type,
            val,
            value_list,
            info,
            ts: raw.ts,
        }
    }
}
