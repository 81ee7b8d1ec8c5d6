//! Image focus analysis against images written to disk.

use image::{GrayImage, Luma, Rgb, RgbImage};
use unplug_core::{analyze_image, FocusReport};

const LIGHTING: &str = "Image appears dark";
const RESOLUTION: &str = "Image resolution is low";

#[test]
fn small_black_image_gets_both_recommendations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("black.png");
    GrayImage::from_pixel(2, 2, Luma([0])).save(&path).unwrap();

    let text = analyze_image(&path);
    assert!(text.contains("• Size: 2x2"));
    assert!(text.contains("• Average Brightness: 0.0/255"));
    assert!(text.contains(LIGHTING));
    assert!(text.contains(RESOLUTION));
    assert!(text.ends_with("Take a 20-second break every 20 minutes when viewing images"));
}

#[test]
fn large_white_image_needs_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("white.png");
    GrayImage::from_pixel(1000, 1000, Luma([255])).save(&path).unwrap();

    let text = analyze_image(&path);
    assert!(text.contains("• Size: 1000x1000"));
    assert!(text.contains("• Average Brightness: 255.0/255"));
    assert!(!text.contains(LIGHTING));
    assert!(!text.contains(RESOLUTION));
}

#[test]
fn color_file_reports_structured_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    RgbImage::from_pixel(800, 600, Rgb([200, 200, 200])).save(&path).unwrap();

    let report = FocusReport::from_path(&path).unwrap();
    assert_eq!((report.width, report.height), (800, 600));
    assert_eq!(report.average_brightness, 200.0);
    assert!(report.recommendations().is_empty());
}

#[test]
fn undecodable_file_is_reported_inline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();

    let text = analyze_image(&path);
    assert!(text.starts_with("⚠️ Could not process image: "), "{text}");
}
