//! # spaceapi-core — Typed SpaceAPI Document Model
//!
//! Foundational types for SpaceAPI 0.13 hackerspace status documents.
//! Every other crate in the workspace depends on `spaceapi-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One enum per controlled vocabulary.** Units, currencies, cache
//!    schedules and issue report channels are enums whose serde form is the
//!    exact wire literal. The schema table builds its enumerations from the
//!    same `ALL` lists, so the two cannot disagree.
//!
//! 2. **Shared shapes are generic.** `Reading<U>` and `Measurement<U>` cover
//!    the sensor shapes that differ only in their unit vocabulary.
//!
//! 3. **Three-valued open status.** `state.open` is `Option<bool>`; `null`
//!    means unknown and is distinct from an absent field, which never
//!    reaches this crate because structural validation rejects it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `spaceapi-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod temporal;
pub mod vocab;

pub use document::{
    AccountBalanceSensor, BeverageSupplySensor, Cache, Contact, DoorLockedSensor, Event, Feed,
    Feeds, Google, Keymaster, Location, Machine, Measurement, MemberCountSensor,
    NetworkConnectionsSensor, OpenStatus, PeopleNowPresentSensor, Radiation, RadiationKind,
    RadiationSensor, RadioShow, Reading, Sensors, SpaceApi, SpaceFed, State, StateIcon, Stream,
    WindProperties, WindSensor,
};
pub use error::SpaceApiError;
pub use vocab::{
    ApiVersion, BarometerUnit, BeverageUnit, CacheSchedule, Currency, DirectionUnit,
    ElevationUnit, HumidityUnit, IssueReportChannel, NetworkType, PowerUnit, RadiationUnit,
    StreamEncoder, TemperatureUnit, WindSpeedUnit,
};
