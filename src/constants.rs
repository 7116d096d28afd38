//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "kml-merge";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// KML 2.2 namespace URI.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Element path, below the root `kml` element, of the track's coordinate text.
pub const COORDINATES_PATH: [&str; 4] = ["Document", "Placemark", "LineString", "coordinates"];

/// Separator between list entries in the positional CLI arguments.
pub const LIST_SEPARATOR: char = ',';

/// Default indentation unit for pretty-printed output.
pub const DEFAULT_INDENT_STRING: &str = "  ";

/// Rates at or below this value are retention fractions; above it, target
/// point counts.
pub const FRACTION_RATE_LIMIT: f64 = 1.0;
