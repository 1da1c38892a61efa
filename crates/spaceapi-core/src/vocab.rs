//! # Controlled Vocabularies
//!
//! Every enumeration and fixed literal of the SpaceAPI 0.13 document
//! format is a Rust enum whose serde representation is the exact wire
//! literal. The schema table builds its `enum` node specifications from
//! [`ALL`](TemperatureUnit::ALL), so the validator and the typed model
//! share one list of legal values per vocabulary.
//!
//! Single-value vocabularies (`HumidityUnit`, `BarometerUnit`, ...) are
//! still enums: the wire format treats them as one-member enumerations,
//! not free strings.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::SpaceApiError;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $lit)] $variant ),+
        }

        impl $name {
            /// Every member in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The exact wire literal for this member.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $lit ),+
                }
            }

            /// Wire literals of every member, in declaration order.
            pub fn literals() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SpaceApiError;

            /// Exact, case-sensitive match against the wire literals.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $lit => Ok($name::$variant), )+
                    other => Err(SpaceApiError::UnknownVariant {
                        vocabulary: stringify!($name),
                        value: other.to_string(),
                        allowed: Self::literals().join(", "),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Version of the SpaceAPI document format.
    ApiVersion {
        V0_13 => "0.13",
    }
}

vocabulary! {
    /// Unit of a temperature reading.
    TemperatureUnit {
        /// Degrees Celsius.
        Celsius => "°C",
        /// Degrees Fahrenheit.
        Fahrenheit => "°F",
        Kelvin => "K",
        Delisle => "°De",
        Newton => "°N",
        Rankine => "°R",
        Reaumur => "°Ré",
        Romer => "°Rø",
    }
}

vocabulary! {
    /// Unit of a barometer reading. Note the capital `A`.
    BarometerUnit {
        Hectopascal => "hPA",
    }
}

vocabulary! {
    /// Unit of a radiation reading.
    RadiationUnit {
        /// Counts per minute. Requires `dead_time` and `conversion_factor`.
        CountsPerMinute => "cpm",
        RoentgenPerHour => "r/h",
        MicrosievertPerHour => "µSv/h",
        MillisievertPerYear => "mSv/a",
        MicrosievertPerYear => "µSv/a",
    }
}

vocabulary! {
    /// Unit of a humidity reading.
    HumidityUnit {
        Percent => "%",
    }
}

vocabulary! {
    /// Unit of a beverage supply reading.
    BeverageUnit {
        Bottles => "btl",
        Crates => "crt",
    }
}

vocabulary! {
    /// Unit of a power consumption reading.
    PowerUnit {
        Milliwatt => "mW",
        Watt => "W",
        VoltAmpere => "VA",
    }
}

vocabulary! {
    /// Unit of wind speed and gust readings.
    WindSpeedUnit {
        MetresPerSecond => "m/s",
        KilometresPerHour => "km/h",
        Knots => "kn",
    }
}

vocabulary! {
    /// Unit of the wind direction reading.
    DirectionUnit {
        Degrees => "°",
    }
}

vocabulary! {
    /// Unit of the wind sensor elevation.
    ElevationUnit {
        Metres => "m",
    }
}

vocabulary! {
    /// Kind of network a connection count refers to.
    NetworkType {
        Wifi => "wifi",
        Cable => "cable",
        Spacenet => "spacenet",
    }
}

vocabulary! {
    /// Currency of an account balance.
    Currency {
        Bitcoin => "BTC",
        Euro => "EUR",
        UsDollar => "USD",
        PoundSterling => "GBP",
    }
}

vocabulary! {
    /// Contact channel used by the revalidator for automated issue reports.
    ///
    /// Each member names a field of the `contact` object.
    IssueReportChannel {
        Email => "email",
        IssueMail => "issue_mail",
        Twitter => "twitter",
        MailingList => "ml",
    }
}

vocabulary! {
    /// Cache update cycle: a unit (`m`, `h`, `d`) and a two-digit count.
    CacheSchedule {
        Minutes2 => "m.02",
        Minutes5 => "m.05",
        Minutes10 => "m.10",
        Minutes15 => "m.15",
        Minutes30 => "m.30",
        Hours1 => "h.01",
        Hours2 => "h.02",
        Hours4 => "h.04",
        Hours8 => "h.08",
        Hours12 => "h.12",
        Days1 => "d.01",
    }
}

vocabulary! {
    /// Encoder of a radio show stream.
    StreamEncoder {
        Mp3 => "mp3",
        Ogg => "ogg",
    }
}

impl CacheSchedule {
    /// Time between two cache updates.
    pub fn interval(self) -> Duration {
        match self {
            Self::Minutes2 => Duration::minutes(2),
            Self::Minutes5 => Duration::minutes(5),
            Self::Minutes10 => Duration::minutes(10),
            Self::Minutes15 => Duration::minutes(15),
            Self::Minutes30 => Duration::minutes(30),
            Self::Hours1 => Duration::hours(1),
            Self::Hours2 => Duration::hours(2),
            Self::Hours4 => Duration::hours(4),
            Self::Hours8 => Duration::hours(8),
            Self::Hours12 => Duration::hours(12),
            Self::Days1 => Duration::days(1),
        }
    }
}
