//! # SpaceAPI 0.13 Document Model
//!
//! Typed representation of a hackerspace status document. A value of
//! [`SpaceApi`] is what a successful validation pass produces.
//!
//! Field names match the wire format exactly. Optional fields are
//! `Option<T>` and are omitted on serialization when `None`. The one
//! exception is `state.open`: the field is required but may be `null`
//! (status unknown), so it is always serialized.
//!
//! Sensor shapes that repeat across sensor kinds are shared generics:
//! [`Reading`] for the value/unit/location/name/description shape and
//! [`Measurement`] for the wind sub-readings. The four radiation kinds
//! share [`RadiationSensor`].

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SpaceApiError;
use crate::temporal;
use crate::vocab::{
    ApiVersion, BarometerUnit, BeverageUnit, CacheSchedule, Currency, DirectionUnit,
    ElevationUnit, HumidityUnit, IssueReportChannel, NetworkType, PowerUnit, RadiationUnit,
    StreamEncoder, TemperatureUnit, WindSpeedUnit,
};

/// Root of a SpaceAPI 0.13 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceApi {
    pub api: ApiVersion,
    pub space: String,
    pub logo: String,
    pub url: String,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacefed: Option<SpaceFed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cam: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<Stream>,
    pub state: State,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    pub contact: Contact,
    /// Channels for automated issue reports from the revalidator.
    ///
    /// Internal to the SpaceAPI tooling. Apps must not consume it.
    pub issue_report_channels: Vec<IssueReportChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensors: Option<Sensors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feeds: Option<Feeds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<Cache>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radio_show: Option<Vec<RadioShow>>,
}

/// Postal address and coordinates of the space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

/// SpaceFED federated login participation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceFed {
    pub spacenet: bool,
    pub spacesaml: bool,
    pub spacephone: bool,
}

/// Stream type to stream URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stream {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mjpeg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ustream: Option<String>,
}

/// Three-valued open status derived from `state.open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenStatus {
    Open,
    Closed,
    Unknown,
}

/// Current status of the space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// `Some(true)` open, `Some(false)` closed, `None` unknown (`null`).
    pub open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastchange: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<StateIcon>,
}

impl State {
    pub fn status(&self) -> OpenStatus {
        match self.open {
            Some(true) => OpenStatus::Open,
            Some(false) => OpenStatus::Closed,
            None => OpenStatus::Unknown,
        }
    }

    /// Instant of the most recent status change, if published.
    pub fn last_change_at(&self) -> Option<Result<DateTime<Utc>, SpaceApiError>> {
        self.lastchange.map(temporal::from_unix)
    }
}

/// Icons showing the open/closed status graphically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateIcon {
    pub open: String,
    pub closed: String,
}

/// Something that recently happened in the space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Event {
    pub fn occurred_at(&self) -> Result<DateTime<Utc>, SpaceApiError> {
        temporal::from_unix(self.timestamp)
    }
}

/// Contact information of the space.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keymasters: Option<Vec<Keymaster>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google: Option<Google>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identica: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foursquare: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ml: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jabber: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_mail: Option<String>,
}

impl Contact {
    /// The contact value that backs an issue report channel, if populated.
    /// Blank strings count as unset.
    pub fn channel(&self, channel: IssueReportChannel) -> Option<&str> {
        let value = match channel {
            IssueReportChannel::Email => &self.email,
            IssueReportChannel::IssueMail => &self.issue_mail,
            IssueReportChannel::Twitter => &self.twitter,
            IssueReportChannel::MailingList => &self.ml,
        };
        populated(value)
    }
}

/// Google services.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Google {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus: Option<String>,
}

/// A person who carries a key and can open the space on request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Keymaster {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irc_nick: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl Keymaster {
    /// True when at least one of irc_nick, phone, email or twitter holds a
    /// non-blank value. `name` alone does not make a keymaster reachable.
    pub fn has_contact_method(&self) -> bool {
        [&self.irc_nick, &self.phone, &self.email, &self.twitter]
            .into_iter()
            .any(|field| populated(field).is_some())
    }
}

fn populated(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

/// Sensor readings published by the space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sensors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Vec<Reading<TemperatureUnit>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_locked: Option<Vec<DoorLockedSensor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barometer: Option<Vec<Reading<BarometerUnit>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radiation: Option<Radiation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<Vec<Reading<HumidityUnit>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beverage_supply: Option<Vec<BeverageSupplySensor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_consumption: Option<Vec<Reading<PowerUnit>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<Vec<WindSensor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_connections: Option<Vec<NetworkConnectionsSensor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_balance: Option<Vec<AccountBalanceSensor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_member_count: Option<Vec<MemberCountSensor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people_now_present: Option<Vec<PeopleNowPresentSensor>>,
}

impl Sensors {
    /// Every radiation reading, tagged with the radiation kind it was
    /// published under, in alpha, beta, gamma, beta_gamma order.
    pub fn radiation_readings(&self) -> impl Iterator<Item = (RadiationKind, &RadiationSensor)> {
        self.radiation.iter().flat_map(|r| r.readings())
    }
}

/// A numeric reading with a unit and a mandatory location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading<U> {
    pub value: f64,
    pub unit: U,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Whether a door is locked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorLockedSensor {
    pub value: bool,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The four radiation kinds a sensor can be published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiationKind {
    Alpha,
    Beta,
    Gamma,
    BetaGamma,
}

impl RadiationKind {
    pub const ALL: &'static [RadiationKind] =
        &[Self::Alpha, Self::Beta, Self::Gamma, Self::BetaGamma];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Gamma => "gamma",
            Self::BetaGamma => "beta_gamma",
        }
    }
}

/// Compound radiation sensor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Radiation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<Vec<RadiationSensor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<Vec<RadiationSensor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<Vec<RadiationSensor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta_gamma: Option<Vec<RadiationSensor>>,
}

impl Radiation {
    pub fn kind(&self, kind: RadiationKind) -> Option<&[RadiationSensor]> {
        match kind {
            RadiationKind::Alpha => self.alpha.as_deref(),
            RadiationKind::Beta => self.beta.as_deref(),
            RadiationKind::Gamma => self.gamma.as_deref(),
            RadiationKind::BetaGamma => self.beta_gamma.as_deref(),
        }
    }

    pub fn readings(&self) -> impl Iterator<Item = (RadiationKind, &RadiationSensor)> {
        RadiationKind::ALL.iter().flat_map(move |&kind| {
            self.kind(kind)
                .unwrap_or_default()
                .iter()
                .map(move |sensor| (kind, sensor))
        })
    }
}

/// One radiation sensor instance.
///
/// When `unit` is `cpm` the value holds observed counts and both
/// `dead_time` and `conversion_factor` are needed to interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiationSensor {
    pub value: f64,
    pub unit: RadiationUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RadiationSensor {
    /// True when a `cpm` reading carries the parameters needed to convert it.
    pub fn has_count_parameters(&self) -> bool {
        self.unit != RadiationUnit::CountsPerMinute
            || (self.dead_time.is_some() && self.conversion_factor.is_some())
    }
}

/// Amount of drinks left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeverageSupplySensor {
    pub value: f64,
    pub unit: BeverageUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A wind sensor instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSensor {
    pub properties: WindProperties,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindProperties {
    pub speed: Measurement<WindSpeedUnit>,
    pub gust: Measurement<WindSpeedUnit>,
    pub direction: Measurement<DirectionUnit>,
    pub elevation: Measurement<ElevationUnit>,
}

/// A bare value/unit pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement<U> {
    pub value: f64,
    pub unit: U,
}

/// Active network connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConnectionsSensor {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<NetworkType>,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machines: Option<Vec<Machine>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A machine connected to the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub mac: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalanceSensor {
    pub value: f64,
    pub unit: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberCountSensor {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeopleNowPresentSensor {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Members currently in the space. Non-empty when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Feeds where users can follow the space.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feeds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<Feed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki: Option<Feed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<Feed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flickr: Option<Feed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    /// Free-form feed type such as `rss`, `atom` or `ical`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub feed_type: Option<String>,
    pub url: String,
}

/// Caching hints for crawlers of the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cache {
    pub schedule: CacheSchedule,
}

/// A radio show broadcast by the space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioShow {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub encoder: StreamEncoder,
    pub start: String,
    pub end: String,
}

impl RadioShow {
    pub fn starts_at(&self) -> Result<DateTime<FixedOffset>, SpaceApiError> {
        temporal::parse_iso8601(&self.start)
    }

    pub fn ends_at(&self) -> Result<DateTime<FixedOffset>, SpaceApiError> {
        temporal::parse_iso8601(&self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> serde_json::Value {
        json!({
            "api": "0.13",
            "space": "Netzladen",
            "logo": "https://example.org/logo.png",
            "url": "https://example.org",
            "location": { "lat": 50.73, "lon": 7.1 },
            "state": { "open": null },
            "contact": { "email": "info@example.org" },
            "issue_report_channels": ["email"]
        })
    }

    #[test]
    fn test_deserialize_minimal_document() {
        let doc: SpaceApi = serde_json::from_value(minimal()).unwrap();
        assert_eq!(doc.api, ApiVersion::V0_13);
        assert_eq!(doc.state.status(), OpenStatus::Unknown);
        assert_eq!(doc.issue_report_channels, vec![IssueReportChannel::Email]);
        assert!(doc.sensors.is_none());
    }

    #[test]
    fn test_null_open_is_serialized() {
        let doc: SpaceApi = serde_json::from_value(minimal()).unwrap();
        let out = serde_json::to_value(&doc).unwrap();
        assert_eq!(out["state"], json!({ "open": null }));
        assert!(out.get("sensors").is_none());
    }

    #[test]
    fn test_open_status() {
        let mut state = State {
            open: Some(true),
            lastchange: None,
            trigger_person: None,
            message: None,
            icon: None,
        };
        assert_eq!(state.status(), OpenStatus::Open);
        state.open = Some(false);
        assert_eq!(state.status(), OpenStatus::Closed);
        assert!(state.last_change_at().is_none());
        state.lastchange = Some(0.0);
        assert_eq!(state.last_change_at().unwrap().unwrap().timestamp(), 0);
    }

    #[test]
    fn test_keymaster_contact_method() {
        let named_only = Keymaster {
            name: Some("J. Random Hacker".into()),
            ..Keymaster::default()
        };
        assert!(!named_only.has_contact_method());

        let with_irc = Keymaster {
            irc_nick: Some("jrh".into()),
            ..Keymaster::default()
        };
        assert!(with_irc.has_contact_method());
    }

    #[test]
    fn test_blank_contact_values_are_unset() {
        let blank = Keymaster {
            irc_nick: Some(String::new()),
            phone: Some("  ".into()),
            ..Keymaster::default()
        };
        assert!(!blank.has_contact_method());

        let contact = Contact {
            email: Some(String::new()),
            twitter: Some("@example".into()),
            ..Contact::default()
        };
        assert_eq!(contact.channel(IssueReportChannel::Email), None);
        assert_eq!(contact.channel(IssueReportChannel::Twitter), Some("@example"));
    }

    #[test]
    fn test_contact_channel_lookup() {
        let contact = Contact {
            ml: Some("list@example.org".into()),
            ..Contact::default()
        };
        assert_eq!(
            contact.channel(IssueReportChannel::MailingList),
            Some("list@example.org")
        );
        assert_eq!(contact.channel(IssueReportChannel::Email), None);
    }

    #[test]
    fn test_radiation_readings_are_tagged_in_kind_order() {
        let sensors: Sensors = serde_json::from_value(json!({
            "radiation": {
                "gamma": [{ "value": 0.1, "unit": "µSv/h" }],
                "alpha": [{ "value": 12, "unit": "cpm", "dead_time": 1.5, "conversion_factor": 0.0057 }]
            }
        }))
        .unwrap();
        let kinds: Vec<RadiationKind> = sensors.radiation_readings().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![RadiationKind::Alpha, RadiationKind::Gamma]);
        assert!(sensors.radiation_readings().all(|(_, s)| s.has_count_parameters()));
    }

    #[test]
    fn test_cpm_without_parameters() {
        let sensor = RadiationSensor {
            value: 20.0,
            unit: RadiationUnit::CountsPerMinute,
            dead_time: Some(1.0),
            conversion_factor: None,
            location: None,
            name: None,
            description: None,
        };
        assert!(!sensor.has_count_parameters());
    }

    #[test]
    fn test_wind_sensor_units() {
        let wind: WindSensor = serde_json::from_value(json!({
            "properties": {
                "speed": { "value": 3.2, "unit": "m/s" },
                "gust": { "value": 7, "unit": "km/h" },
                "direction": { "value": 270, "unit": "°" },
                "elevation": { "value": 42, "unit": "m" }
            },
            "location": "Roof"
        }))
        .unwrap();
        assert_eq!(wind.properties.gust.unit, WindSpeedUnit::KilometresPerHour);
        assert_eq!(wind.properties.direction.unit, DirectionUnit::Degrees);
    }

    #[test]
    fn test_radio_show_times() {
        let show = RadioShow {
            name: "Signal".into(),
            url: "http://signal.hackerspaces.org:8090/signal.mp3".into(),
            encoder: StreamEncoder::Mp3,
            start: "2013-06-10T10:00Z".into(),
            end: "2013-06-10T14:00+02:00".into(),
        };
        let start = show.starts_at().unwrap();
        let end = show.ends_at().unwrap();
        assert_eq!((end - start).num_hours(), 2);
    }

    #[test]
    fn test_event_type_field_name() {
        let event: Event = serde_json::from_value(json!({
            "name": "fridge",
            "type": "check-in",
            "timestamp": 1371859200
        }))
        .unwrap();
        assert_eq!(event.kind, "check-in");
        let out = serde_json::to_value(&event).unwrap();
        assert_eq!(out["type"], "check-in");
    }
}
