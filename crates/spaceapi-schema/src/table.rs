//! # SpaceAPI 0.13 Schema Table
//!
//! The field graph of the SpaceAPI 0.13 status document: every field with
//! its kind, optionality and constraints. Help texts are not here; see
//! [`crate::docs`].
//!
//! Controlled vocabularies (units, currencies, cache schedules, issue
//! report channels) are built from the `literals()` of the matching
//! `spaceapi_core` enum, so the table and the typed model share one
//! source of truth. A single-member vocabulary becomes a literal node.
//!
//! The schema is built on first use and shared for the lifetime of the
//! process. It is immutable, so concurrent validations read it without
//! locking.

use std::sync::OnceLock;

use spaceapi_core::{
    ApiVersion, BarometerUnit, BeverageUnit, CacheSchedule, Currency, DirectionUnit,
    ElevationUnit, HumidityUnit, IssueReportChannel, NetworkType, PowerUnit, RadiationKind,
    RadiationUnit, StreamEncoder, TemperatureUnit, WindSpeedUnit,
};

use crate::node::{
    array_of, boolean, literal, null, number, object, one_of, string, union, NodeSpec,
    ObjectSpec, Schema, SchemaDefinitionError,
};

/// Name reported in validation errors against this schema.
pub const SCHEMA_NAME: &str = "SpaceAPI 0.13";

static SPACE_API_V013: OnceLock<Result<Schema, SchemaDefinitionError>> = OnceLock::new();

/// The process-wide SpaceAPI 0.13 schema.
///
/// # Errors
///
/// Returns the [`SchemaDefinitionError`] raised while freezing the table.
/// The table is static, so this is a programming error that surfaces on
/// the first call and on every call after it.
pub fn space_api_v013() -> Result<&'static Schema, SchemaDefinitionError> {
    SPACE_API_V013
        .get_or_init(build)
        .as_ref()
        .map_err(Clone::clone)
}

/// Build a fresh copy of the SpaceAPI 0.13 schema.
pub fn build() -> Result<Schema, SchemaDefinitionError> {
    Schema::new(SCHEMA_NAME, root())
}

/// Whether a sensor's `location` field is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

fn with_field(obj: ObjectSpec, name: &str, spec: NodeSpec, presence: Presence) -> ObjectSpec {
    match presence {
        Presence::Required => obj.required(name, spec),
        Presence::Optional => obj.optional(name, spec),
    }
}

/// Literal for a one-member vocabulary, enum otherwise.
pub fn vocabulary(literals: Vec<&'static str>) -> NodeSpec {
    match literals.as_slice() {
        [only] => literal(*only),
        _ => one_of(literals),
    }
}

/// `location`, `name` and `description`, shared by every sensor shape.
fn sensor_tail(obj: ObjectSpec, location: Presence) -> ObjectSpec {
    with_field(obj, "location", string(), location)
        .optional("name", string())
        .optional("description", string())
}

/// The value/unit/location/name/description sensor reading.
pub fn reading(unit: NodeSpec, location: Presence) -> NodeSpec {
    sensor_tail(
        object().required("value", number()).required("unit", unit),
        location,
    )
    .into()
}

/// One radiation reading, shared by all four radiation kinds.
pub fn radiation_sensor() -> NodeSpec {
    sensor_tail(
        object()
            .required("value", number())
            .required("unit", vocabulary(RadiationUnit::literals()))
            .optional("dead_time", number())
            .optional("conversion_factor", number()),
        Presence::Optional,
    )
    .into()
}

/// A bare value/unit pair.
pub fn measurement(unit: NodeSpec) -> NodeSpec {
    object()
        .required("value", number())
        .required("unit", unit)
        .into()
}

pub fn feed() -> NodeSpec {
    object()
        .optional("type", string())
        .required("url", string())
        .into()
}

fn location() -> ObjectSpec {
    object()
        .optional("address", string())
        .required("lat", number())
        .required("lon", number())
}

fn spacefed() -> ObjectSpec {
    object()
        .required("spacenet", boolean())
        .required("spacesaml", boolean())
        .required("spacephone", boolean())
}

fn stream() -> ObjectSpec {
    object()
        .optional("m4", string())
        .optional("mjpeg", string())
        .optional("ustream", string())
}

fn state() -> ObjectSpec {
    object()
        .required("open", union([boolean(), null()]))
        .optional("lastchange", number())
        .optional("trigger_person", string())
        .optional("message", string())
        .optional(
            "icon",
            object()
                .required("open", string())
                .required("closed", string()),
        )
}

fn event() -> ObjectSpec {
    object()
        .required("name", string())
        .required("type", string())
        .required("timestamp", number())
        .optional("extra", string())
}

fn keymaster() -> ObjectSpec {
    object()
        .optional("name", string())
        .optional("irc_nick", string())
        .optional("phone", string())
        .optional("email", string())
        .optional("twitter", string())
}

fn contact() -> ObjectSpec {
    object()
        .optional("phone", string())
        .optional("sip", string())
        .optional("keymasters", array_of(keymaster()).min_len(1))
        .optional("irc", string())
        .optional("twitter", string())
        .optional("facebook", string())
        .optional("google", object().optional("plus", string()))
        .optional("identica", string())
        .optional("foursquare", string())
        .optional("email", string())
        .optional("ml", string())
        .optional("jabber", string())
        .optional("issue_mail", string())
}

fn radiation() -> ObjectSpec {
    RadiationKind::ALL.iter().fold(object(), |obj, kind| {
        obj.optional(kind.as_str(), array_of(radiation_sensor()))
    })
}

fn wind_sensor() -> NodeSpec {
    let speed = || measurement(vocabulary(WindSpeedUnit::literals()));
    let properties = object()
        .required("speed", speed())
        .required("gust", speed())
        .required("direction", measurement(vocabulary(DirectionUnit::literals())))
        .required("elevation", measurement(vocabulary(ElevationUnit::literals())));
    sensor_tail(object().required("properties", properties), Presence::Required).into()
}

fn network_connections_sensor() -> NodeSpec {
    let machine = object()
        .optional("name", string())
        .required("mac", string());
    sensor_tail(
        object()
            .optional("type", vocabulary(NetworkType::literals()))
            .required("value", number())
            .optional("machines", array_of(machine)),
        Presence::Optional,
    )
    .into()
}

fn people_now_present_sensor() -> ObjectSpec {
    object()
        .required("value", number())
        .optional("location", string())
        .optional("name", string())
        .optional("names", array_of(string()).min_len(1))
        .optional("description", string())
}

fn sensors() -> ObjectSpec {
    let door_locked = sensor_tail(object().required("value", boolean()), Presence::Required);
    let member_count = sensor_tail(object().required("value", number()), Presence::Optional);
    object()
        .optional(
            "temperature",
            array_of(reading(vocabulary(TemperatureUnit::literals()), Presence::Required)),
        )
        .optional("door_locked", array_of(door_locked))
        .optional(
            "barometer",
            array_of(reading(vocabulary(BarometerUnit::literals()), Presence::Required)),
        )
        .optional("radiation", radiation())
        .optional(
            "humidity",
            array_of(reading(vocabulary(HumidityUnit::literals()), Presence::Required)),
        )
        .optional(
            "beverage_supply",
            array_of(reading(vocabulary(BeverageUnit::literals()), Presence::Optional)),
        )
        .optional(
            "power_consumption",
            array_of(reading(vocabulary(PowerUnit::literals()), Presence::Required)),
        )
        .optional("wind", array_of(wind_sensor()))
        .optional("network_connections", array_of(network_connections_sensor()))
        .optional(
            "account_balance",
            array_of(reading(vocabulary(Currency::literals()), Presence::Optional)),
        )
        .optional("total_member_count", array_of(member_count))
        .optional("people_now_present", array_of(people_now_present_sensor()))
}

fn feeds() -> ObjectSpec {
    ["blog", "wiki", "calendar", "flickr"]
        .into_iter()
        .fold(object(), |obj, name| obj.optional(name, feed()))
}

fn radio_show() -> ObjectSpec {
    object()
        .required("name", string())
        .required("url", string())
        .required("type", vocabulary(StreamEncoder::literals()))
        .required("start", string())
        .required("end", string())
}

fn root() -> ObjectSpec {
    object()
        .required("api", vocabulary(ApiVersion::literals()))
        .required("space", string())
        .required("logo", string())
        .required("url", string())
        .required("location", location())
        .optional("spacefed", spacefed())
        .optional("cam", array_of(string()).min_len(1))
        .optional("stream", stream())
        .required("state", state())
        .optional("events", array_of(event()))
        .required("contact", contact())
        .required(
            "issue_report_channels",
            array_of(vocabulary(IssueReportChannel::literals())).min_len(1),
        )
        .optional("sensors", sensors())
        .optional("feeds", feeds())
        .optional(
            "cache",
            object().required("schedule", vocabulary(CacheSchedule::literals())),
        )
        .optional("projects", array_of(string()))
        .optional("radio_show", array_of(radio_show()))
}
