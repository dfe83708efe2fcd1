//! Colorspace regression test
//!
//! Tests RGB<->HSL, RGB->YIQ, the two distance metrics and weighted
//! averaging against fixed reference values.

use commoncolors_core::{
    Color, MAX_RGB_DISTANCE, average, euclidean_distance, hsl_to_rgb, hue, luminance, rgb_to_hsl,
    rgb_to_yiq, saturation, yiq_distance,
};
use commoncolors_test::{RegParams, hue_sweep};

/// Pure red against black, evaluated directly from the YIQ coefficients
const YIQ_RED_BLACK: f64 = 102.0301;

/// Value asserted for the same pair by an earlier revision of the algorithm
const LEGACY_YIQ_RED_BLACK: f64 = 123.0;

#[test]
fn colorspace_reg() {
    let mut rp = RegParams::new("colorspace");

    // --- Luminance ---
    rp.compare_values(0.0, luminance(&Color::rgb(0, 0, 0)), 1e-9);
    rp.compare_values(1.0, luminance(&Color::rgb(255, 255, 255)), 1e-9);
    rp.compare_values(0.587, luminance(&Color::rgb(0, 255, 0)), 1e-9);
    rp.compare_values(0.114, luminance(&Color::rgb(0, 0, 255)), 1e-9);

    // --- Achromatic fixed point ---
    for v in (0..=255u8).step_by(5) {
        let gray = Color::rgb(v, v, v);
        rp.compare_values(0.0, saturation(&gray), 0.0);
        rp.compare_values(0.0, hue(&gray), 0.0);
    }

    // --- HSL roundtrip over a sweep of chromatic colors ---
    for lightness in [0.2, 0.5, 0.8] {
        for c in hue_sweep(36, lightness) {
            let (r2, g2, b2) = hsl_to_rgb(rgb_to_hsl(c.r, c.g, c.b));
            rp.compare_values(c.r as f64, r2 as f64, 1.0);
            rp.compare_values(c.g as f64, g2 as f64, 1.0);
            rp.compare_values(c.b as f64, b2 as f64, 1.0);
        }
    }

    // --- Hue stays in [0, 1) ---
    for c in hue_sweep(72, 0.5) {
        let h = hue(&c);
        rp.check((0.0..1.0).contains(&h), "hue in [0, 1)");
    }

    // --- YIQ ---
    let yiq = rgb_to_yiq(255, 0, 0);
    rp.compare_values(76.2183, yiq.y, 1e-3);
    rp.compare_values(151.9744, yiq.i, 1e-3);
    rp.compare_values(53.9249, yiq.q, 1e-3);

    let red = Color::rgba(255, 0, 0, 0);
    let black = Color::rgba(0, 0, 0, 0);
    let d = yiq_distance(&red, &black);
    rp.compare_values(YIQ_RED_BLACK, d, 1e-3);
    // The legacy constant does not follow from the coefficients
    rp.check(
        (d - LEGACY_YIQ_RED_BLACK).abs() > 1.0,
        "yiq distance deviates from the legacy constant",
    );

    // --- Distance symmetry and bounds ---
    let samples: Vec<Color> = hue_sweep(12, 0.4)
        .into_iter()
        .chain([Color::rgb(0, 0, 0), Color::rgb(255, 255, 255)])
        .collect();
    for a in &samples {
        for b in &samples {
            rp.compare_values(euclidean_distance(a, b), euclidean_distance(b, a), 0.0);
            rp.compare_values(yiq_distance(a, b), yiq_distance(b, a), 0.0);
            rp.check(
                euclidean_distance(a, b) <= MAX_RGB_DISTANCE + 1e-9,
                "euclidean distance within the RGB cube diagonal",
            );
        }
    }

    // --- Weighted average ---
    let c1 = Color::rgba(200, 100, 20, 100).with_weight(3);
    let c2 = Color::rgba(100, 25, 80, 255).with_weight(2);
    let merged = average(&[c1, c2]).expect("average");
    rp.compare_colors(&Color::rgba(160, 70, 44, 162).with_weight(5), &merged);

    let many: Vec<Color> = (1..=10u32)
        .map(|w| Color::rgb(10 * w as u8, 0, 0).with_weight(w))
        .collect();
    let merged = average(&many).expect("average");
    rp.compare_values(55.0, merged.weight() as f64, 0.0);
    // sum(10w * w) / sum(w) = 3850 / 55 = 70
    rp.compare_values(70.0, merged.r as f64, 0.0);

    // --- Hex ---
    rp.compare_strings("#ff00ff", &Color::rgb(255, 0, 255).to_hex());
    rp.compare_strings("#000000", &Color::rgba(0, 0, 0, 0).to_hex());

    assert!(rp.cleanup(), "colorspace regression test failed");
}
