/*!
 * Typed records decoded from the canned device scripts.
 *
 * The JSON shapes here are defined by the scripts under `scripts/`; the
 * device itself has no JSON API.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record whose display fields can be rewritten in place by the
/// translation pass.
pub trait Translatable {
    /// Display name
    fn name_mut(&mut self) -> &mut String;

    /// Optional description field
    fn info_mut(&mut self) -> Option<&mut String> {
        None
    }
}

/// Physical device with its channels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    pub id: u64,
    pub address: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    #[serde(default)]
    pub interface: String,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// One channel of a device
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    pub id: u64,
    pub address: String,
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: String,
    /// 1 = sender, 2 = receiver
    #[serde(default)]
    pub direction: u8,
}

/// Current state of one channel datapoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValueEntry {
    pub id: u64,
    pub address: String,
    pub name: String,
    pub value: Value,
}

/// A rega program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub id: u64,
    pub name: String,
    pub active: bool,
    /// Last execution time as reported by the device
    #[serde(default)]
    pub ts: String,
}

/// A room and the channels assigned to it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub channels: Vec<u64>,
}

impl Translatable for Room {
    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    fn info_mut(&mut self) -> Option<&mut String> {
        self.info.as_mut()
    }
}

/// A function (trade) and the channels assigned to it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Function {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub channels: Vec<u64>,
}

impl Translatable for Function {
    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    fn info_mut(&mut self) -> Option<&mut String> {
        self.info.as_mut()
    }
}

/// A system variable after wire post-processing: escapes undone and the
/// enum value list expanded into a sequence
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SysVar {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub var_type: String,
    pub val: Value,
    /// Possible values of an enum variable, in declaration order
    pub value_list: Vec<String>,
    pub info: Option<String>,
    pub ts: String,
}

/// Wire form of a system variable as the canned script emits it. The enum
/// value list arrives as a single `;`-joined escaped string; use
/// [`TranslationCache::decode_variable`](crate::TranslationCache::decode_variable)
/// to turn this into a [`SysVar`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawSysVar {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub var_type: String,
    pub val: Value,
    #[serde(rename = "enum", default)]
    pub value_list: String,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub ts: String,
}
