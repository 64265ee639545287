use std::fs;
use std::path::PathBuf;

use storeshots::rendering::raster::render;
use storeshots::{DeviceClass, DeviceTarget, FontBook, SCREENS};

const SAMPLES: &str = "phone_samples.txt";

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

/// One expected pixel: `<mockup> <x> <y> <r> <g> <b>`.
struct Sample {
    mockup: String,
    x: u32,
    y: u32,
    rgb: [u8; 3],
}

fn parse_samples(text: &str) -> Vec<Sample> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| {
            let f: Vec<&str> = l.split_whitespace().collect();
            assert_eq!(f.len(), 6, "malformed golden line: {l}");
            let n = |i: usize| f[i].parse::<u32>().expect("numeric field");
            Sample {
                mockup: f[0].to_string(),
                x: n(1),
                y: n(2),
                rgb: [n(3) as u8, n(4) as u8, n(5) as u8],
            }
        })
        .collect()
}

/// Built-in font only, so the result does not depend on installed fonts.
fn render_screens() -> Vec<(String, image::RgbImage)> {
    let fonts = FontBook::builtin();
    let device = DeviceTarget::new("golden", 430, 932, DeviceClass::Phone);
    SCREENS
        .iter()
        .map(|screen| (screen.mockup.to_string(), render(&device, screen, &fonts)))
        .collect()
}

#[test]
fn golden_pixels_match_fixture() {
    let path = golden_path(SAMPLES);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("unable to read golden {:?}: {e}", path));
    let samples = parse_samples(&text);
    let screens = render_screens();

    if std::env::var("UPDATE_GOLDENS").is_ok() {
        let mut out: String = text.lines().filter(|l| l.starts_with('#')).map(|l| format!("{l}\n")).collect();
        for s in &samples {
            let (_, img) = screens.iter().find(|(m, _)| *m == s.mockup).expect("known mockup");
            let p = img.get_pixel(s.x, s.y);
            out.push_str(&format!("{} {} {} {} {} {}\n", s.mockup, s.x, s.y, p[0], p[1], p[2]));
        }
        fs::write(&path, out).expect("write golden");
        println!("Updated golden: {:?}", path);
        return;
    }

    let mut mismatches = Vec::new();
    for s in &samples {
        let (_, img) = screens
            .iter()
            .find(|(m, _)| *m == s.mockup)
            .unwrap_or_else(|| panic!("unknown mockup {}", s.mockup));
        let got = img.get_pixel(s.x, s.y).0;
        if got != s.rgb {
            mismatches.push(format!("{} ({}, {}): expected {:?}, got {:?}", s.mockup, s.x, s.y, s.rgb, got));
        }
    }
    assert!(mismatches.is_empty(), "{} golden pixels differ:\n{}", mismatches.len(), mismatches.join("\n"));
}

#[test]
fn golden_fixture_covers_every_screen() {
    let text = fs::read_to_string(golden_path(SAMPLES)).expect("unable to read golden");
    let samples = parse_samples(&text);
    for screen in SCREENS.iter() {
        let tag = screen.mockup.to_string();
        let n = samples.iter().filter(|s| s.mockup == tag).count();
        assert!(n >= 8, "only {n} samples for {tag}");
    }
}
