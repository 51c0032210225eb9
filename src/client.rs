/*!
 * The rega remote-script client.
 *
 * One `RegaClient` is one session against a CCU: it owns the HTTP client,
 * the endpoint URL and the session's translation cache. `exec` is the
 * transport primitive; the high-level operations compose it with canned
 * scripts and the translation pass.
 */

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::app_config::RegaConfig;
use crate::encoding::{decode_latin1, encode_latin1};
use crate::errors::{DecodeError, ProtocolError, RegaError, TransportError};
use crate::objects::{Device, Function, Program, RawSysVar, Room, SysVar, ValueEntry};
use crate::response::{ScriptResponse, parse_response};
use crate::translation::{HttpLangFetcher, LangFetcher, TranslationCache};

const SCRIPT_CHANNELS: &str = include_str!("../scripts/channels.rega");
const SCRIPT_VALUES: &str = include_str!("../scripts/values.rega");
const SCRIPT_PROGRAMS: &str = include_str!("../scripts/programs.rega");
const SCRIPT_VARIABLES: &str = include_str!("../scripts/variables.rega");
const SCRIPT_ROOMS: &str = include_str!("../scripts/rooms.rega");
const SCRIPT_FUNCTIONS: &str = include_str!("../scripts/functions.rega");

/// Client session for the CCU remote script endpoint
pub struct RegaClient {
    /// Session configuration
    config: RegaConfig,
    /// HTTP client for script requests
    http: Client,
    /// Script endpoint URL
    url: String,
    /// Session translation cache
    translations: TranslationCache,
}

impl RegaClient {
    /// Build a client session from a configuration.
    ///
    /// Validates the endpoint and sets up the HTTP client with the
    /// configured timeout.
    pub fn new(config: RegaConfig) -> Result<Self, RegaError> {
        config.validate()?;
        let fetcher = HttpLangFetcher::new(
            HttpLangFetcher::asset_url(&config.host, &config.language),
            Duration::from_secs(config.timeout_secs),
        );
        Self::with_lang_fetcher(config, Arc::new(fetcher))
    }

    /// Build a client with a custom language asset source.
    ///
    /// Used by tests and by callers that serve the asset from somewhere
    /// other than the device's WebUI.
    pub fn with_lang_fetcher(
        config: RegaConfig,
        fetcher: Arc<dyn LangFetcher>,
    ) -> Result<Self, RegaError> {
        config.validate()?;
        let url = format!("http://{}:{}/rega.exe", config.host, config.port);
        Url::parse(&url)
            .map_err(|e| RegaError::Config(format!("invalid endpoint {}: {}", url, e)))?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RegaError::Config(format!("cannot build HTTP client: {}", e)))?;
        let translations = TranslationCache::new(!config.disable_translation, fetcher);
        Ok(Self {
            config,
            http,
            url,
            translations,
        })
    }

    /// Endpoint this session talks to
    pub fn endpoint(&self) -> &str {
        &self.url
    }

    /// The session's translation cache
    pub fn translations(&self) -> &TranslationCache {
        &self.translations
    }

    /// Execute a rega script and parse its response.
    ///
    /// The script is transmitted as ISO-8859-1 with an explicit
    /// Content-Length for the encoded byte count; the reply is decoded
    /// with the same charset and split at the document boundary. Transport
    /// failures are never retried here.
    pub async fn exec(&self, script: &str) -> Result<ScriptResponse, RegaError> {
        let body = encode_latin1(script);
        debug!("POST {} ({} script bytes)", self.url, body.len());
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&self.url, self.config.timeout_secs, e))?;
        let status = response.status();
        if !status.is_success() {
            // rega.exe reports script problems in-band, not via status
            debug!("rega endpoint answered {}", status);
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(&self.url, self.config.timeout_secs, e))?;
        if bytes.is_empty() {
            return Err(ProtocolError::EmptyResponse.into());
        }
        let decoded = decode_latin1(&bytes);
        Ok(parse_response(&decoded)?)
    }

    /// Run a canned script and decode its JSON console output
    async fn json_script<T: DeserializeOwned>(&self, script: &str) -> Result<T, RegaError> {
        let response = self.exec(script).await?;
        serde_json::from_str(&response.output).map_err(|source| {
            DecodeError {
                output: response.output,
                source,
            }
            .into()
        })
    }

    /// All devices with their channels. Names come back exactly as stored
    /// on the device, untranslated.
    pub async fn channels(&self) -> Result<Vec<Device>, RegaError> {
        self.json_script(SCRIPT_CHANNELS).await
    }

    /// Current values of all channel datapoints
    pub async fn values(&self) -> Result<Vec<ValueEntry>, RegaError> {
        self.json_script(SCRIPT_VALUES).await
    }

    /// All programs
    pub async fn programs(&self) -> Result<Vec<Program>, RegaError> {
        self.json_script(SCRIPT_PROGRAMS).await
    }

    /// All rooms, with placeholder names and descriptions resolved against
    /// the WebUI language table
    pub async fn rooms(&self) -> Result<Vec<Room>, RegaError> {
        self.translations.ensure_ready().await;
        let mut rooms: Vec<Room> = self.json_script(SCRIPT_ROOMS).await?;
        self.translations.apply_to_names(&mut rooms);
        Ok(rooms)
    }

    /// All functions, with placeholder names and descriptions resolved
    /// against the WebUI language table
    pub async fn functions(&self) -> Result<Vec<Function>, RegaError> {
        self.translations.ensure_ready().await;
        let mut functions: Vec<Function> = self.json_script(SCRIPT_FUNCTIONS).await?;
        self.translations.apply_to_names(&mut functions);
        Ok(functions)
    }

    /// All system variables, with wire escaping undone and enum value
    /// lists expanded
    pub async fn variables(&self) -> Result<Vec<SysVar>, RegaError> {
        self.translations.ensure_ready().await;
        let raw: Vec<RawSysVar> = self.json_script(SCRIPT_VARIABLES).await?;
        Ok(raw
            .into_iter()
            .map(|record| self.translations.decode_variable(record))
            .collect())
    }

    /// Set a system variable's value.
    ///
    /// The value is embedded as its JSON literal, so strings arrive quoted
    /// and escaped.
    pub async fn set_variable(
        &self,
        id: u64,
        value: impl Into<Value>,
    ) -> Result<ScriptResponse, RegaError> {
        let value: Value = value.into();
        self.exec(&format!("dom.GetObject({}).State({});", id, value))
            .await
    }

    /// Start a program now
    pub async fn start_program(&self, id: u64) -> Result<ScriptResponse, RegaError> {
        self.exec(&format!("dom.GetObject({}).ProgramExecute();", id))
            .await
    }

    /// Activate or deactivate a program
    pub async fn set_program_active(
        &self,
        id: u64,
        active: bool,
    ) -> Result<ScriptResponse, RegaError> {
        self.exec(&format!("dom.GetObject({}).Active({});", id, active))
            .await
    }

    /// Rename an object.
    ///
    /// The name is embedded as a JSON string literal, so quotes in it
    /// cannot break out of the script.
    pub async fn rename_object(&self, id: u64, name: &str) -> Result<ScriptResponse, RegaError> {
        self.exec(&format!(
            "dom.GetObject({}).Name({});",
            id,
            Value::from(name)
        ))
        .await
    }
}
