//! Tests for merging tracks through the library API.

mod common;

use std::path::PathBuf;

use kml_merge::kml::WriteOptions;
use kml_merge::{Error, SampleRate, TrackDocument, combine};
use tempfile::tempdir;
use xmltree::{Element, XMLNode};

fn rates(values: &[f64]) -> Vec<SampleRate> {
    values.iter().map(|&v| SampleRate::new(v).unwrap()).collect()
}

fn reparse(bytes: &[u8]) -> TrackDocument {
    TrackDocument::from_reader(bytes, "merged.kml").unwrap()
}

/// Every element with its attributes and non-coordinate text, depth first.
fn outline(element: &Element, depth: usize, out: &mut Vec<String>) {
    let mut attributes: Vec<_> = element.attributes.iter().collect();
    attributes.sort();
    let text = if element.name == "coordinates" {
        String::new()
    } else {
        element
            .get_text()
            .map(|t| t.trim().to_string())
            .unwrap_or_default()
    };
    out.push(format!(
        "{depth} {:?} {} {attributes:?} {text}",
        element.namespace, element.name
    ));
    for child in &element.children {
        if let XMLNode::Element(child) = child {
            outline(child, depth + 1, out);
        }
    }
}

fn outline_of(doc: &TrackDocument) -> Vec<String> {
    let mut out = Vec::new();
    outline(doc.root(), 0, &mut out);
    out
}

#[test]
fn test_structure_of_first_input_preserved() {
    let dir = tempdir().unwrap();
    let a = common::write_track(dir.path(), "a.kml", "Morning", &common::points(1, 6));
    let b = common::write_track(dir.path(), "b.kml", "Evening", &common::points(2, 4));

    let bytes = combine(&[a.clone(), b], &rates(&[1.0, 1.0]), &WriteOptions::default()).unwrap();
    let merged = reparse(&bytes);
    let first = TrackDocument::open(&a).unwrap();

    assert_eq!(outline_of(&merged), outline_of(&first));
    let name = merged.root().get_child("Document").unwrap().get_child("name");
    assert_eq!(name.unwrap().get_text().unwrap(), "Morning");
}

#[test]
fn test_output_declares_kml_namespace_on_root_only() {
    let dir = tempdir().unwrap();
    let a = common::write_track(dir.path(), "a.kml", "A", &common::points(1, 3));

    let bytes = combine(&[a], &rates(&[1.0]), &WriteOptions::default()).unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.starts_with(r#"<kml xmlns="http://www.opengis.net/kml/2.2""#));
    assert_eq!(text.matches("xmlns=").count(), 1);
    assert!(text.contains("<Document>"));

    let merged = reparse(&bytes);
    assert_eq!(
        merged.root().namespace.as_deref(),
        Some("http://www.opengis.net/kml/2.2")
    );
}

#[test]
fn test_rate_one_keeps_every_point() {
    let dir = tempdir().unwrap();
    let coords = common::points(1, 9);
    let a = common::write_track(dir.path(), "a.kml", "A", &coords);

    let bytes = combine(&[a], &rates(&[1.0]), &WriteOptions::default()).unwrap();
    assert_eq!(reparse(&bytes).coordinates_text().unwrap(), coords);
}

#[test]
fn test_rate_half_keeps_even_indices() {
    let dir = tempdir().unwrap();
    let a = common::write_track(dir.path(), "a.kml", "A", "p0\np1\np2\np3\np4\n");

    let bytes = combine(&[a], &rates(&[0.5]), &WriteOptions::default()).unwrap();
    assert_eq!(reparse(&bytes).coordinates_text().unwrap(), "p0\np2\np4\n");
}

#[test]
fn test_point_count_rate_ten_points() {
    let dir = tempdir().unwrap();
    let coords = "p0\np1\np2\np3\np4\np5\np6\np7\np8\np9\n";
    let a = common::write_track(dir.path(), "a.kml", "A", coords);

    let bytes = combine(&[a], &rates(&[5.0]), &WriteOptions::default()).unwrap();
    assert_eq!(
        reparse(&bytes).coordinates_text().unwrap(),
        "p0\np2\np4\np6\np8\n"
    );
}

#[test]
fn test_inputs_concatenated_not_interleaved() {
    let dir = tempdir().unwrap();
    let a = common::write_track(dir.path(), "a.kml", "A", "a0\na1\na2\na3\n");
    let b = common::write_track(dir.path(), "b.kml", "B", "b0\nb1\nb2\nb3\n");

    let bytes = combine(
        &[b, a],
        &rates(&[0.5, 1.0]),
        &WriteOptions::default(),
    )
    .unwrap();
    assert_eq!(
        reparse(&bytes).coordinates_text().unwrap(),
        "b0\nb2\na0\na1\na2\na3\n"
    );

    // The second input only contributes points; its name is not used.
    let merged = reparse(&bytes);
    let name = merged.root().get_child("Document").unwrap().get_child("name");
    assert_eq!(name.unwrap().get_text().unwrap(), "B");
}

#[test]
fn test_count_mismatch_is_configuration_error() {
    let err = combine(
        &[PathBuf::from("a.kml"), PathBuf::from("b.kml")],
        &rates(&[1.0]),
        &WriteOptions::default(),
    )
    .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_malformed_second_input() {
    let dir = tempdir().unwrap();
    let a = common::write_track(dir.path(), "a.kml", "A", "a0\n");
    let b = dir.path().join("b.kml");
    std::fs::write(&b, "<kml><Document>").unwrap();

    let err = combine(&[a, b.clone()], &rates(&[1.0, 1.0]), &WriteOptions::default())
        .unwrap_err();
    match err {
        Error::Parse { path, .. } => assert_eq!(path, b),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_missing_coordinates_is_structure_error() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.kml");
    std::fs::write(
        &a,
        r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document><name>empty</name></Document></kml>"#,
    )
    .unwrap();

    let err = combine(&[a], &rates(&[1.0]), &WriteOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Structure { ref missing, .. } if missing == "Placemark"));
}

#[test]
fn test_prefixed_input_written_with_default_namespace() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.kml");
    std::fs::write(
        &a,
        r#"<k:kml xmlns:k="http://www.opengis.net/kml/2.2"><k:Document><k:Placemark><k:LineString><k:coordinates>1,2,0
3,4,0
</k:coordinates></k:LineString></k:Placemark></k:Document></k:kml>"#,
    )
    .unwrap();

    let bytes = combine(&[a], &rates(&[1.0]), &WriteOptions::default()).unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.contains("<coordinates>1,2,0\n3,4,0\n</coordinates>"));
    assert_eq!(reparse(&bytes).coordinates_text().unwrap(), "1,2,0\n3,4,0\n");
}
