//! Integration test: the typed SpaceAPI document model against wire JSON.

use serde_json::json;
use spaceapi_core::{
    Currency, IssueReportChannel, OpenStatus, RadiationKind, SpaceApi, SpaceApiError,
    StreamEncoder, TemperatureUnit,
};

fn document() -> serde_json::Value {
    json!({
        "api": "0.13",
        "space": "Bitlair",
        "logo": "https://bitlair.example/logo.png",
        "url": "https://bitlair.example",
        "location": { "lat": 52.15, "lon": 5.38 },
        "state": { "open": null, "lastchange": 1371859200 },
        "events": [{ "name": "door", "type": "check-out", "timestamp": 1371859260 }],
        "contact": {
            "issue_mail": "issues@bitlair.example",
            "keymasters": [{ "irc_nick": "kevin" }]
        },
        "issue_report_channels": ["issue_mail"],
        "sensors": {
            "temperature": [{ "value": 19, "unit": "°Rø", "location": "hall" }],
            "radiation": {
                "gamma": [{ "value": 12, "unit": "cpm", "dead_time": 0.0002, "conversion_factor": 0.0057 }],
                "alpha": [{ "value": 0.1, "unit": "µSv/h" }]
            },
            "account_balance": [{ "value": -12.5, "unit": "GBP" }]
        },
        "radio_show": [{
            "name": "Bitcast",
            "url": "http://radio.bitlair.example:8060/;",
            "type": "ogg",
            "start": "2013-06-10T07:00-03:00",
            "end": "2013-06-10T10:00:30Z"
        }]
    })
}

#[test]
fn test_decode_wire_document() {
    let doc: SpaceApi = serde_json::from_value(document()).unwrap();
    assert_eq!(doc.state.status(), OpenStatus::Unknown);
    assert_eq!(doc.events.as_ref().unwrap()[0].kind, "check-out");

    let sensors = doc.sensors.as_ref().unwrap();
    assert_eq!(sensors.temperature.as_ref().unwrap()[0].unit, TemperatureUnit::Romer);
    assert_eq!(sensors.account_balance.as_ref().unwrap()[0].unit, Currency::PoundSterling);

    let kinds: Vec<RadiationKind> = sensors.radiation_readings().map(|(k, _)| k).collect();
    assert_eq!(kinds, vec![RadiationKind::Alpha, RadiationKind::Gamma]);
}

#[test]
fn test_timestamps() {
    let doc: SpaceApi = serde_json::from_value(document()).unwrap();
    let changed = doc.state.last_change_at().unwrap().unwrap();
    let checked_out = doc.events.as_ref().unwrap()[0].occurred_at().unwrap();
    assert_eq!((checked_out - changed).num_seconds(), 60);

    let show = &doc.radio_show.as_ref().unwrap()[0];
    assert_eq!(show.encoder, StreamEncoder::Ogg);
    let start = show.starts_at().unwrap();
    let end = show.ends_at().unwrap();
    assert_eq!(start.to_rfc3339(), "2013-06-10T07:00:00-03:00");
    assert_eq!((end - start).num_seconds(), 30);
}

#[test]
fn test_report_channels_resolve_to_contact_fields() {
    let doc: SpaceApi = serde_json::from_value(document()).unwrap();
    for channel in &doc.issue_report_channels {
        assert!(doc.contact.channel(*channel).is_some(), "{channel} has no contact field");
    }
    assert_eq!(doc.contact.channel(IssueReportChannel::Email), None);
    assert!(doc.contact.keymasters.as_ref().unwrap()[0].has_contact_method());
}

#[test]
fn test_serialization_keeps_null_open_and_drops_absent_fields() {
    let doc: SpaceApi = serde_json::from_value(document()).unwrap();
    let back = serde_json::to_value(&doc).unwrap();
    assert_eq!(back["state"]["open"], serde_json::Value::Null);
    assert!(back["state"].as_object().unwrap().contains_key("open"));
    assert!(back.get("cam").is_none());
    assert!(back["contact"].get("email").is_none());
    assert_eq!(back["radio_show"][0]["type"], "ogg");
}

#[test]
fn test_unknown_unit_is_rejected() {
    let mut raw = document();
    raw["sensors"]["temperature"][0]["unit"] = json!("C");
    assert!(serde_json::from_value::<SpaceApi>(raw).is_err());

    let err = "C".parse::<TemperatureUnit>().unwrap_err();
    assert!(matches!(err, SpaceApiError::UnknownVariant { vocabulary: "TemperatureUnit", .. }));
}
