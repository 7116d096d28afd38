//! Shared fixtures for integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::fs;
use std::path::{Path, PathBuf};

/// Write a KML track with the given coordinate text and return its path.
pub fn write_track(dir: &Path, file_name: &str, track_name: &str, coordinates: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, track_kml(track_name, coordinates)).unwrap();
    path
}

/// A KML 2.2 document with styling and metadata around one `LineString`.
pub fn track_kml(track_name: &str, coordinates: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2">
  <Document>
    <name>{track_name}</name>
    <Style id="track-style">
      <LineStyle>
        <color>ff0000ff</color>
        <width>4</width>
      </LineStyle>
    </Style>
    <Placemark>
      <name>{track_name} path</name>
      <styleUrl>#track-style</styleUrl>
      <LineString>
        <tessellate>1</tessellate>
        <altitudeMode>clampToGround</altitudeMode>
        <coordinates>{coordinates}</coordinates>
      </LineString>
    </Placemark>
  </Document>
</kml>
"#
    )
}

/// `n` distinct points, one per line, each with a trailing newline.
pub fn points(prefix: u32, n: usize) -> String {
    (0..n)
        .map(|i| format!("{prefix}.{i},4{prefix}.{i},0\n"))
        .collect()
}
