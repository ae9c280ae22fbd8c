#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// A LabelMe polygon shape.
pub fn polygon(label: &str, points: &[(f64, f64)]) -> Value {
    shape(label, "polygon", points)
}

pub fn shape(label: &str, shape_type: &str, points: &[(f64, f64)]) -> Value {
    let points: Vec<[f64; 2]> = points.iter().map(|&(x, y)| [x, y]).collect();
    json!({
        "label": label,
        "points": points,
        "group_id": null,
        "description": "",
        "shape_type": shape_type,
        "flags": {}
    })
}

/// Write `<stem>.json` as LabelMe would, with the given shapes.
pub fn write_annotation(dir: &Path, stem: &str, width: u32, height: u32, shapes: Vec<Value>) {
    let annotation = json!({
        "version": "5.4.1",
        "flags": {},
        "shapes": shapes,
        "imagePath": format!("{}.jpg", stem),
        "imageData": null,
        "imageHeight": height,
        "imageWidth": width
    });
    fs::write(
        dir.join(format!("{}.json", stem)),
        serde_json::to_string_pretty(&annotation).expect("serialize annotation"),
    )
    .expect("write annotation");
}

/// Write a stand-in JPEG; only the bytes are copied, never decoded.
pub fn write_jpg(dir: &Path, stem: &str) {
    fs::write(
        dir.join(format!("{}.jpg", stem)),
        [0xFF, 0xD8, 0xFF, 0xE0, stem.len() as u8],
    )
    .expect("write image");
}

/// A small corpus exercising every branch of the converter.
///
/// - `img1`: cat polygon, image present
/// - `img2`: dog + bird polygons and a rectangle, image present
/// - `img3`: rectangle only, image present
/// - `img4`: cat polygon, image missing
/// - `broken`: not JSON
pub fn create_sample_corpus(dir: &Path) {
    write_annotation(
        dir,
        "img1",
        100,
        200,
        vec![polygon("cat", &[(10.0, 20.0), (50.0, 60.0)])],
    );
    write_jpg(dir, "img1");

    write_annotation(
        dir,
        "img2",
        400,
        100,
        vec![
            polygon("dog", &[(0.0, 0.0), (400.0, 0.0), (400.0, 100.0)]),
            shape("apple", "rectangle", &[(1.0, 1.0), (2.0, 2.0)]),
            polygon("bird", &[(100.0, 25.0), (200.0, 50.0), (300.0, 75.0)]),
        ],
    );
    write_jpg(dir, "img2");

    write_annotation(
        dir,
        "img3",
        50,
        50,
        vec![shape("cat", "rectangle", &[(1.0, 1.0), (20.0, 20.0)])],
    );
    write_jpg(dir, "img3");

    write_annotation(
        dir,
        "img4",
        10,
        10,
        vec![polygon("cat", &[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)])],
    );

    fs::write(dir.join("broken.json"), "{\"shapes\": [").expect("write broken json");
}
