/*!
 * Placeholder translation for device object names.
 *
 * The device reports rooms, functions and system variables with symbolic
 * `${...}` placeholder names. This module fetches the WebUI's
 * locale-specific string table and applies it to result records:
 *
 * - `table`: The key/value table and its line-oriented asset parser
 * - `fetcher`: Sources for the raw language asset
 * - `cache`: Session-scoped cache with single-flight lazy acquisition
 */

// Re-export main types for easier usage
pub use self::cache::TranslationCache;
pub use self::fetcher::{HttpLangFetcher, LangFetcher};
pub use self::table::TranslationTable;

// Submodules
pub mod cache;
pub mod fetcher;
pub mod table;
