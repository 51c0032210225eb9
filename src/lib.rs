/*!
 * # homematic-rega
 *
 * Async client for the HomeMatic CCU remote script endpoint (`rega.exe`).
 *
 * ## Features
 *
 * - Execute rega scripts over HTTP with ISO-8859-1 wire transcoding
 * - Split the device's unframed reply into console output and the
 *   structured variable document it appends
 * - Resolve `${...}` placeholder names of rooms, functions and system
 *   variables against the WebUI language table, fetched lazily at most
 *   once per session
 * - Typed access to devices, channels, values, programs, rooms, functions
 *   and system variables through canned scripts
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Session configuration
 * - `client`: HTTP transport and high-level device operations
 * - `response`: Response boundary detection and document parsing
 * - `encoding`: Wire charset and legacy escape decoding
 * - `translation`: Language table acquisition and application:
 *   - `translation::cache`: Session-scoped single-flight cache
 *   - `translation::table`: The table and its asset micro-parser
 *   - `translation::fetcher`: Language asset sources
 * - `objects`: Typed records decoded from canned scripts
 * - `errors`: Custom error types for the client
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod client;
pub mod encoding;
pub mod errors;
pub mod objects;
pub mod response;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::RegaConfig;
pub use client::RegaClient;
pub use errors::{DecodeError, ProtocolError, RegaError, TransportError};
pub use objects::{Channel, Device, Function, Program, Room, SysVar, Translatable, ValueEntry};
pub use response::{DOCUMENT_BOUNDARY, ScriptResponse};
pub use translation::{LangFetcher, TranslationCache, TranslationTable};
