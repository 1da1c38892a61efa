//! # Documentation Table
//!
//! Help texts for the SpaceAPI 0.13 schema, keyed by schema path. The
//! texts contain HTML markup intended for UI generation and are never
//! read during validation.
//!
//! A `*` segment matches any single field name, so the four radiation
//! kinds share one set of entries.

const SENSOR_VALUE: &str = "The sensor value";
const SENSOR_UNIT: &str = "The unit of the sensor value. You should always define the unit though if the sensor is a flag of a boolean type then you can of course omit it.";
const SENSOR_LOCATION: &str = "The location of your sensor such as <samp>Outside</samp>, <samp>Inside</samp>, <samp>Ceiling</samp>, <samp>Roof</samp> or <samp>Room 1</samp>.";
const SENSOR_NAME: &str = "This field is an additional field to give your sensor a name. This can be useful if you have multiple sensors in the same location.";
const SENSOR_DESCRIPTION: &str = "An extra field that you can use to attach some additional information to this sensor instance.";
const STATE_OPEN: &str = "A flag which indicates if the space is currently open or closed. The state 'undefined' can be achieved by assigning this field the value 'null' (without the quotes). In most (all?) programming languages this is evaluated to false so that no app should break";
const FEED_TYPE: &str = "Type of the feed, for example <samp>rss</samp>, <samp>atom</samp>, <samp>ical</samp>";
const FEED_URL: &str = "Feed URL";

macro_rules! iso_8601 {
    ($field:literal) => {
        concat!(
            "Specify the ",
            $field,
            " time by using the <a href=\"http://en.wikipedia.org/wiki/ISO_8601\" target=\"_blank\">ISO 8601</a> standard. This encodes the time as follows: <br><br><ul><li>Combined date and time in UTC: 2013-06-10T10:00Z</li><li>Combined date and time in localtime with the timezone offset: 2013-06-10T12:00+02:00</li><li>Combined date and time in localtime with the timezone offset: 2013-06-10T07:00-03:00</li></ul> The examples refer all to the same time."
        )
    };
}

/// (schema path, help text), in schema declaration order.
static ENTRIES: &[(&str, &str)] = &[
    ("", "SpaceAPI 0.13"),
    ("api", "The version of SpaceAPI your endpoint uses"),
    ("space", "The name of your space"),
    ("logo", "URL to your space logo"),
    ("url", "URL to your space website"),
    ("location", "Position data such as a postal address or geographic coordinates"),
    ("location.address", "The postal address of your space (street, block, housenumber, zip code, city, whatever you usually need in your country, and the country itself).<br>Examples: <ul><li>Netzladen e.V., Breite Straße 74, 53111 Bonn, Germany</li></ul>"),
    ("location.lat", "Latitude of your space location, in degree with decimal places. Use positive values for locations north of the equator, negative values for locations south of equator."),
    ("location.lon", "Longitude of your space location, in degree with decimal places. Use positive values for locations east of Greenwich, and negative values for locations west of Greenwich."),
    ("spacefed", "A flag indicating if the hackerspace uses SpaceFED, a federated login scheme so that visiting hackers can use the space WiFi with their home space credentials."),
    ("spacefed.spacenet", "See the <a target=\"_blank\" href=\"https://spacefed.net/wiki/index.php/Category:Howto/Spacenet\">wiki</a>."),
    ("spacefed.spacesaml", "See the <a target=\"_blank\" href=\"https://spacefed.net/wiki/index.php/Category:Howto/Spacesaml\">wiki</a>."),
    ("spacefed.spacephone", "See the <a target=\"_blank\" href=\"https://spacefed.net/wiki/index.php/Category:Howto/Spacephone\">wiki</a>."),
    ("cam", "URL(s) of webcams in your space"),
    ("stream", "A mapping of stream types to stream URLs. If you use other stream types make a <a href=\"https://github.com/spaceapi/schema/pulls\" target=\"_blank\">pull request</a> or prefix yours with <samp>ext_</samp>."),
    ("stream.m4", "Your mpg stream URL. Example: <samp>{\"mp4\": \"http://example.org/stream.mpg\"}</samp>"),
    ("stream.mjpeg", "Your mjpeg stream URL. Example: <samp>{\"mjpeg\": \"http://example.org/stream.mjpeg\"}</samp>"),
    ("stream.ustream", "Your ustream stream URL. Example: <samp>{\"ustream\": \"http://www.ustream.tv/channel/hackspsps\"}</samp>"),
    ("state", "A collection of status-related data: actual open/closed status, icons, last change timestamp etc."),
    ("state.open", STATE_OPEN),
    ("state.lastchange", "The Unix timestamp when the space status changed most recently"),
    ("state.trigger_person", "The person who lastly changed the state e.g. opened or closed the space."),
    ("state.message", "An additional free-form string, could be something like <samp>'open for public'</samp>, <samp>'members only'</samp> or whatever you want it to be"),
    ("state.icon", "Icons that show the status graphically"),
    ("state.icon.open", "The URL to your customized space logo showing an open space"),
    ("state.icon.closed", "The URL to your customized space logo showing a closed space"),
    ("events", "Events which happened recently in your space and which could be interesting to the public, like 'User X has entered/triggered/did something at timestamp Z'"),
    ("events[].name", "Name or other identity of the subject (e.g. <samp>J. Random Hacker</samp>, <samp>fridge</samp>, <samp>3D printer</samp>, …)"),
    ("events[].type", "Action (e.g. <samp>check-in</samp>, <samp>check-out</samp>, <samp>finish-print</samp>, …). Define your own actions and use them consistently, canonical actions are not (yet) specified"),
    ("events[].timestamp", "Unix timestamp when the event occurred"),
    ("events[].extra", "A custom text field to give more information about the event"),
    ("contact", "Contact information about your space. You must define at least one which is in the list of allowed values of the issue_report_channels field."),
    ("contact.phone", "Phone number, including country code with a leading plus sign. Example: <samp>+1 800 555 4567</samp>"),
    ("contact.sip", "URI for Voice-over-IP via SIP. Example: <samp>sip:yourspace@sip.example.org</samp>"),
    ("contact.keymasters", "Persons who carry a key and are able to open the space upon request. One of the fields irc_nick, phone, email or twitter must be specified."),
    ("contact.keymasters[].name", "Real name"),
    ("contact.keymasters[].irc_nick", "Contact the person with this nickname directly in irc if available. The irc channel to be used is defined in the contact/irc field."),
    ("contact.keymasters[].phone", "Example: <samp>['+1 800 555 4567','+1 800 555 4544']</samp>"),
    ("contact.keymasters[].email", "Email address which can be base64 encoded."),
    ("contact.keymasters[].twitter", "Twitter username with leading <samp>@</samp>."),
    ("contact.irc", "URL of the IRC channel, in the form <samp>irc://example.org/#channelname</samp>"),
    ("contact.twitter", "Twitter handle, with leading @"),
    ("contact.facebook", "Facebook account URL."),
    ("contact.google", "Google services."),
    ("contact.google.plus", "Google plus URL."),
    ("contact.identica", "Identi.ca or StatusNet account, in the form <samp>yourspace@example.org</samp>"),
    ("contact.foursquare", "Foursquare ID, in the form <samp>4d8a9114d85f3704eab301dc</samp>."),
    ("contact.email", "E-mail address for contacting your space. If this is a mailing list consider to use the contact/ml field."),
    ("contact.ml", "The e-mail address of your mailing list. If you use Google Groups then the e-mail looks like <samp>your-group@googlegroups.com</samp>."),
    ("contact.jabber", "A public Jabber/XMPP multi-user chatroom in the form <samp>chatroom@conference.example.net</samp>"),
    ("contact.issue_mail", "A separate email address for issue reports (see the <em>issue_report_channels</em> field). This value can be Base64-encoded."),
    ("issue_report_channels", "This array defines all communication channels where you want to get automated issue reports about your SpaceAPI endpoint from the revalidator. This field is meant for internal usage only and it should never be consumed by any app. At least one channel must be defined. Please consider that when using <samp>ml</samp> the mailing list moderator has to moderate incoming emails or add the sender email to the subscribers. If you don't break your SpaceAPI implementation you won't get any notifications ;-)"),
    ("sensors", "Data of various sensors in your space (e.g. temperature, humidity, amount of Club-Mate left, …). The only canonical property is the <em>temp</em> property, additional sensor types may be defined by you. In this case, you are requested to share your definition for inclusion in this specification."),
    ("sensors.temperature", "Temperature sensor. To convert from one unit of temperature to another consider <a href=\"http://en.wikipedia.org/wiki/Temperature_conversion_formulas\" target=\"_blank\">Wikipedia</a>."),
    ("sensors.temperature[].value", SENSOR_VALUE),
    ("sensors.temperature[].unit", "The unit of the sensor value."),
    ("sensors.temperature[].location", SENSOR_LOCATION),
    ("sensors.temperature[].name", SENSOR_NAME),
    ("sensors.temperature[].description", SENSOR_DESCRIPTION),
    ("sensors.door_locked", "Sensor type to indicate if a certain door is locked."),
    ("sensors.door_locked[].value", SENSOR_VALUE),
    ("sensors.door_locked[].location", "The location of your sensor such as <samp>front door</samp>, <samp>chill room</samp> or <samp>lab</samp>."),
    ("sensors.door_locked[].name", SENSOR_NAME),
    ("sensors.door_locked[].description", SENSOR_DESCRIPTION),
    ("sensors.barometer", "Barometer sensor"),
    ("sensors.barometer[].value", SENSOR_VALUE),
    ("sensors.barometer[].unit", SENSOR_UNIT),
    ("sensors.barometer[].location", SENSOR_LOCATION),
    ("sensors.barometer[].name", SENSOR_NAME),
    ("sensors.barometer[].description", SENSOR_DESCRIPTION),
    ("sensors.radiation", "Compound radiation sensor. Check this <a rel=\"nofollow\" href=\"https://sites.google.com/site/diygeigercounter/gm-tubes-supported\" target=\"_blank\">resource</a>."),
    ("sensors.radiation.alpha", "An alpha sensor"),
    ("sensors.radiation.beta", "A beta sensor"),
    ("sensors.radiation.gamma", "A gamma sensor"),
    ("sensors.radiation.beta_gamma", "A sensor which cannot filter beta and gamma radiation separately."),
    ("sensors.radiation.*[].value", "Observed counts per minute (ocpm) or actual radiation value. If the value are the observed counts then the dead_time and conversion_factor fields must be defined as well. CPM formula: <div>cpm = ocpm ( 1 + 1 / (1 - ocpm x dead_time) )</div> Conversion formula: <div>µSv/h = cpm x conversion_factor</div>"),
    ("sensors.radiation.*[].unit", "Choose the appropriate unit for your radiation sensor instance."),
    ("sensors.radiation.*[].dead_time", "The dead time in µs. See the description of the value field to see how to use the dead time."),
    ("sensors.radiation.*[].conversion_factor", "The conversion from the <em>cpm</em> unit to another unit hardly depends on your tube type. See the description of the value field to see how to use the conversion factor. <strong>Note:</strong> only trust your manufacturer if it comes to the actual factor value. The internet seems <a rel=\"nofollow\" href=\"http://sapporohibaku.wordpress.com/2011/10/15/conversion-factor/\" target=\"_blank\">full of wrong copy & pastes</a>, don't even trust your neighbour hackerspace. If in doubt ask the tube manufacturer."),
    ("sensors.radiation.*[].location", SENSOR_LOCATION),
    ("sensors.radiation.*[].name", SENSOR_NAME),
    ("sensors.radiation.*[].description", SENSOR_DESCRIPTION),
    ("sensors.humidity", "Humidity sensor"),
    ("sensors.humidity[].value", SENSOR_VALUE),
    ("sensors.humidity[].unit", SENSOR_UNIT),
    ("sensors.humidity[].location", SENSOR_LOCATION),
    ("sensors.humidity[].name", SENSOR_NAME),
    ("sensors.humidity[].description", SENSOR_DESCRIPTION),
    ("sensors.beverage_supply", "How much Mate and beer is in your fridge?"),
    ("sensors.beverage_supply[].value", SENSOR_VALUE),
    ("sensors.beverage_supply[].unit", "The unit, either <samp>btl</samp> for bottles or <samp>crt</samp> for crates."),
    ("sensors.beverage_supply[].location", "The location of your sensor such as <samp>Room 1</samp> or <samp>Room 2</samp> or <samp>Room 3</samp>, <samp>Roof</samp> or <samp>Room 1</samp>."),
    ("sensors.beverage_supply[].name", SENSOR_NAME),
    ("sensors.beverage_supply[].description", SENSOR_DESCRIPTION),
    ("sensors.power_consumption", "The power consumption of a specific device or of your whole space."),
    ("sensors.power_consumption[].value", SENSOR_VALUE),
    ("sensors.power_consumption[].unit", SENSOR_UNIT),
    ("sensors.power_consumption[].location", SENSOR_LOCATION),
    ("sensors.power_consumption[].name", SENSOR_NAME),
    ("sensors.power_consumption[].description", SENSOR_DESCRIPTION),
    ("sensors.wind", "Your wind sensor."),
    ("sensors.wind[].properties.*.value", SENSOR_VALUE),
    ("sensors.wind[].properties.*.unit", SENSOR_UNIT),
    ("sensors.wind[].properties.direction", "The wind direction in degrees."),
    ("sensors.wind[].properties.elevation", "Height above mean sea level."),
    ("sensors.wind[].location", SENSOR_LOCATION),
    ("sensors.wind[].name", SENSOR_NAME),
    ("sensors.wind[].description", SENSOR_DESCRIPTION),
    ("sensors.network_connections", "This sensor type is to specify the currently active  ethernet or wireless network devices. You can create different instances for each network type."),
    ("sensors.network_connections[].type", "This field is optional but you can use it to the network type such as <samp>wifi</samp> or <samp>cable</samp>. You can even expose the number of <a href=\"https://spacefed.net/wiki/index.php/Spacenet\" target=\"_blank\">spacenet</a>-authenticated connections."),
    ("sensors.network_connections[].value", "The amount of network connections."),
    ("sensors.network_connections[].machines", "The machines that are currently connected with the network."),
    ("sensors.network_connections[].machines[].name", "The machine name."),
    ("sensors.network_connections[].machines[].mac", "The machine's MAC address of the format <samp>D3:3A:DB:EE:FF:00</samp>."),
    ("sensors.network_connections[].location", SENSOR_LOCATION),
    ("sensors.network_connections[].name", SENSOR_NAME),
    ("sensors.network_connections[].description", SENSOR_DESCRIPTION),
    ("sensors.account_balance", "How rich is your hackerspace?"),
    ("sensors.account_balance[].value", "How much?"),
    ("sensors.account_balance[].unit", "What's the currency? Please use the ones provided, in the next version you can use currency definitions according to <a href=\"https://en.wikipedia.org/wiki/ISO_4217\" target=\"_blank\">ISO 4217</a>"),
    ("sensors.account_balance[].location", "If you have more than one account you can use this field to specify where it is."),
    ("sensors.account_balance[].name", "Give your sensor instance a name."),
    ("sensors.account_balance[].description", SENSOR_DESCRIPTION),
    ("sensors.total_member_count", "Specify the number of space members."),
    ("sensors.total_member_count[].value", "The amount of your space members."),
    ("sensors.total_member_count[].location", "Specify the location if your hackerspace has different departments (for whatever reason). This field is for one department. Every department should have its own sensor instance."),
    ("sensors.total_member_count[].name", "You can use this field to specify if this sensor instance counts active or inactive members."),
    ("sensors.total_member_count[].description", SENSOR_DESCRIPTION),
    ("sensors.people_now_present", "Specify the number of people that are currently in your space. Optionally you can define a list of names."),
    ("sensors.people_now_present[].value", "The amount of present people."),
    ("sensors.people_now_present[].location", "If you use multiple sensor instances for different rooms, use this field to indicate the location."),
    ("sensors.people_now_present[].name", "Give this sensor a name if necessary at all. Use the location field for the rooms. This field is not intended to be used for names of hackerspace members. Use the field 'names' instead."),
    ("sensors.people_now_present[].names", "List of hackerspace members that are currently occupying the space."),
    ("sensors.people_now_present[].description", SENSOR_DESCRIPTION),
    ("feeds", "Feeds where users can get updates of your space"),
    ("feeds.*.type", FEED_TYPE),
    ("feeds.*.url", FEED_URL),
    ("cache", "Specifies options about caching of your SpaceAPI endpoint. Use this if you want to avoid hundreds/thousands of application instances crawling your status."),
    ("cache.schedule", "Cache update cycle. This field must match the basic regular expression <code>^[mhd]\\.[0-9]{2}$</code>, where the first field specifies a unit of time (<code>m</code> for 1 minute, <code>h</code> for 1 hour, <code>d</code> for 1 day), and the second field specifies how many of this unit should be skipped between updates. For example, <samp>m.10</samp> means one updates every 10 minutes, <samp>h.03</samp> means one update every 3 hours, and <samp>d.01</samp> means one update every day."),
    ("projects", "Your project sites (links to GitHub, wikis or wherever your projects are hosted)"),
    ("radio_show", "A list of radio shows that your hackerspace might broadcast."),
    ("radio_show[].name", "The name of the radio show."),
    ("radio_show[].url", "The stream URL which must end in a filename or a semicolon such as <br><ul><li>http://signal.hackerspaces.org:8090/signal.mp3</li><li>http://85.214.64.213:8060/;</ul>"),
    ("radio_show[].type", "The stream encoder."),
    ("radio_show[].start", iso_8601!("start")),
    ("radio_show[].end", iso_8601!("end")),
];

/// A documented schema path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocEntry {
    /// Schema path pattern; `*` matches any single field name.
    pub path: &'static str,
    pub text: &'static str,
}

/// Help text for a schema path such as `sensors.radiation.gamma[].unit`.
///
/// Exact entries win over wildcard entries.
pub fn describe(path: &str) -> Option<&'static str> {
    ENTRIES
        .iter()
        .find(|(p, _)| *p == path)
        .or_else(|| ENTRIES.iter().find(|(p, _)| path_matches(p, path)))
        .map(|(_, text)| *text)
}

/// Every documented path pattern with its help text.
pub fn entries() -> Vec<DocEntry> {
    ENTRIES
        .iter()
        .map(|&(path, text)| DocEntry { path, text })
        .collect()
}

/// True if any documented pattern covers `path`.
pub fn is_documented(path: &str) -> bool {
    ENTRIES.iter().any(|(p, _)| path_matches(p, path))
}

/// Segment-wise match of a documentation pattern against a schema path.
pub fn path_matches(pattern: &str, path: &str) -> bool {
    if pattern.is_empty() || path.is_empty() {
        return pattern == path;
    }
    let mut pat = pattern.split('.');
    let mut actual = path.split('.');
    loop {
        match (pat.next(), actual.next()) {
            (None, None) => return true,
            (Some(p), Some(a)) => {
                if !segment_matches(p, a) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

fn segment_matches(pattern: &str, segment: &str) -> bool {
    let (p_name, p_depth) = strip_brackets(pattern);
    let (a_name, a_depth) = strip_brackets(segment);
    p_depth == a_depth && (p_name == "*" || p_name == a_name)
}

fn strip_brackets(segment: &str) -> (&str, usize) {
    let trimmed = segment.trim_end_matches("[]");
    (trimmed, (segment.len() - trimmed.len()) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup() {
        assert_eq!(describe("space"), Some("The name of your space"));
        assert!(describe("location.lat").unwrap().contains("Latitude"));
        assert!(describe("no.such.path").is_none());
    }

    #[test]
    fn test_radiation_kinds_share_entries() {
        let alpha = describe("sensors.radiation.alpha[].dead_time").unwrap();
        let beta_gamma = describe("sensors.radiation.beta_gamma[].dead_time").unwrap();
        assert_eq!(alpha, beta_gamma);
        assert_eq!(describe("sensors.radiation.gamma"), Some("A gamma sensor"));
    }

    #[test]
    fn test_radio_show_times_explain_iso_8601() {
        let start = describe("radio_show[].start").unwrap();
        assert!(start.contains("ISO 8601"));
        assert!(start.contains("2013-06-10T12:00+02:00"));
    }

    #[test]
    fn test_path_matches() {
        assert!(path_matches("feeds.*.url", "feeds.blog.url"));
        assert!(!path_matches("feeds.*.url", "feeds.blog"));
        assert!(!path_matches("sensors.radiation.*[].unit", "sensors.radiation.alpha.unit"));
        assert!(path_matches("", ""));
        assert!(!path_matches("", "space"));
    }

    #[test]
    fn test_issue_report_channels_flags_internal_use() {
        let text = describe("issue_report_channels").unwrap();
        assert!(text.contains("internal usage only"));
    }

    #[test]
    fn test_entries_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for entry in entries() {
            assert!(seen.insert(entry.path), "duplicate entry {}", entry.path);
        }
    }
}
