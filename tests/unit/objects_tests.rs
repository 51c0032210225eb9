/*!
 * Tests for the typed records decoded from canned scripts
 */

use homematic_rega::objects::{Device, Function, Program, RawSysVar, Room, Translatable};
use serde_json::json;

#[test]
fn test_device_fromScriptJson_shouldDeserializeWithChannels() {
    let payload = json!([{
        "id": 1412,
        "address": "NEQ1234567",
        "name": "Thermostat Bad",
        "type": "HM-CC-RT-DN",
        "interface": "BidCos-RF",
        "channels": [{
            "id": 1413,
            "address": "NEQ1234567:1",
            "name": "Thermostat Bad:1",
            "type": "CLIMATECONTROL_RT_TRANSCEIVER",
            "direction": 1
        }]
    }]);

    let devices: Vec<Device> = serde_json::from_value(payload).unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].device_type, "HM-CC-RT-DN");
    assert_eq!(devices[0].channels[0].channel_type, "CLIMATECONTROL_RT_TRANSCEIVER");
    assert_eq!(devices[0].channels[0].direction, 1);
}

#[test]
fn test_program_fromScriptJson_shouldDeserialize() {
    let payload = json!([
        {"id": 2001, "name": "Alle Lichter aus", "active": true, "ts": "2026-08-01 06:30:00"},
        {"id": 2002, "name": "Urlaub", "active": false}
    ]);

    let programs: Vec<Program> = serde_json::from_value(payload).unwrap();
    assert!(programs[0].active);
    assert_eq!(programs[1].ts, "");
}

#[test]
fn test_rawSysVar_fromScriptJson_shouldMapEnumField() {
    let payload = json!({
        "id": 950,
        "name": "Anwesenheit",
        "type": "enum",
        "val": 1,
        "enum": "zu%20Hause;unterwegs",
        "ts": "2026-08-01 10:00:00"
    });

    let raw: RawSysVar = serde_json::from_value(payload).unwrap();
    assert_eq!(raw.value_list, "zu%20Hause;unterwegs");
    assert_eq!(raw.info, None);
}

#[test]
fn test_rawSysVar_withMissingOptionalFields_shouldUseDefaults() {
    let payload = json!({"id": 1, "name": "x", "type": "boolean", "val": false});
    let raw: RawSysVar = serde_json::from_value(payload).unwrap();
    assert_eq!(raw.value_list, "");
    assert_eq!(raw.ts, "");
}

#[test]
fn test_room_translatableSeam_shouldExposeNameAndInfo() {
    let mut room = Room {
        id: 1,
        name: "${room.1}".to_string(),
        info: Some("info".to_string()),
        channels: vec![],
    };

    *room.name_mut() = "Wohnzimmer".to_string();
    if let Some(info) = room.info_mut() {
        *info = "neu".to_string();
    }

    assert_eq!(room.name, "Wohnzimmer");
    assert_eq!(room.info.as_deref(), Some("neu"));
}

#[test]
fn test_function_withoutInfo_shouldExposeNoInfoSlot() {
    let mut function = Function {
        id: 7,
        name: "${func.7}".to_string(),
        info: None,
        channels: vec![1, 2],
    };

    assert!(function.info_mut().is_none());
}

#[test]
fn test_room_fromScriptJson_shouldDeserializeChannelIds() {
    let payload = json!([{"id": 5, "name": "${room.5}", "info": "", "channels": [10, 20, 30]}]);
    let rooms: Vec<Room> = serde_json::from_value(payload).unwrap();
    assert_eq!(rooms[0].channels, vec![10, 20, 30]);
}
