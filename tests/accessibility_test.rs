//! End-to-end accessibility scenarios.
//!
//! Each test is a falsifiable claim about the public contrast API, checked
//! through the same entry points a caller would use.
//!
//! Run: cargo test --test accessibility_test

#![allow(clippy::unwrap_used)]

use chromamap::contrast::{DEFAULT_MAX_ATTEMPTS, DEFAULT_PRECISION, DEFAULT_STEP_SIZE};
use chromamap::prelude::*;

fn color(s: &str) -> Color {
    s.parse().expect("test colors are valid")
}

/// Claim: black on white is the maximum possible contrast, exactly 21:1.
#[test]
fn black_on_white_is_21_to_1() {
    let ratio = contrast_ratio(&color("black"), &color("white"));
    assert!(
        (ratio - 21.0).abs() < 1e-6,
        "Black/white contrast {ratio} != 21.0"
    );
}

/// Claim: black-on-white passes both AA and AAA.
#[test]
fn black_on_white_passes_both_levels() {
    assert!(is_accessible(&color("black"), &color("white"), WcagLevel::Aa));
    assert!(is_accessible(&color("black"), &color("white"), WcagLevel::Aaa));
}

/// Claim: an already-accessible base is returned unchanged.
#[test]
fn accessible_base_is_a_noop() {
    let navy = color("navy");
    let white = color("white");
    assert!(contrast_ratio(&navy, &white) >= 4.5);

    let result = find_accessible_color(&navy, &white, WcagLevel::Aa, LuminanceAxis::Lightness);
    assert_eq!(result, navy);
}

/// Claim: pastel pink against white reaches AA when asked for AA.
#[test]
fn pastel_pink_reaches_aa_against_white() {
    let result = find_accessible_color(
        &color("#ffcccc"),
        &color("white"),
        WcagLevel::Aa,
        LuminanceAxis::Lightness,
    );
    let ratio = contrast_ratio(&result, &color("white"));
    assert!(ratio >= 4.5, "AA not reached: {ratio}");
}

/// Claim: the same pastel pink reaches AAA when asked for AAA.
#[test]
fn pastel_pink_reaches_aaa_against_white() {
    let result = find_accessible_color(
        &color("#ffcccc"),
        &color("white"),
        WcagLevel::Aaa,
        LuminanceAxis::Lightness,
    );
    let ratio = contrast_ratio(&result, &color("white"));
    assert!(ratio >= 7.0, "AAA not reached: {ratio}");
}

/// Claim: binary search strictly improves a mid gray against white.
#[test]
fn binary_search_improves_mid_gray() {
    let gray = color("#888888");
    let white = color("white");
    let before = contrast_ratio(&gray, &white);

    let result = find_maximal_contrast_binary_search(
        &gray,
        &white,
        WcagLevel::Aa,
        LuminanceAxis::Lightness,
        DEFAULT_PRECISION,
    );
    let after = contrast_ratio(&result, &white);
    assert!(after > before, "No improvement: {before} -> {after}");
}

/// Claim: no strategy ever returns a color worse than its input.
#[test]
fn no_strategy_regresses() {
    let pairs = [
        ("#888888", "white"),
        ("#ffcccc", "white"),
        ("#333333", "black"),
        ("#ff6666", "#000080"),
        ("#ccccff", "#800080"),
    ];

    for (base_str, target_str) in pairs {
        let base = color(base_str);
        let target = color(target_str);
        let before = contrast_ratio(&base, &target);

        let results = [
            find_accessible_color(&base, &target, WcagLevel::Aa, LuminanceAxis::Lightness),
            find_maximal_contrast_iterative(
                &base,
                &target,
                WcagLevel::Aa,
                LuminanceAxis::Lightness,
                DEFAULT_STEP_SIZE,
                DEFAULT_MAX_ATTEMPTS,
            ),
            find_maximal_contrast_binary_search(
                &base,
                &target,
                WcagLevel::Aa,
                LuminanceAxis::Lightness,
                DEFAULT_PRECISION,
            ),
            find_maximal_contrast_optimization(&base, &target, WcagLevel::Aa, "golden_section")
                .unwrap(),
            find_maximal_contrast_optimization(&base, &target, WcagLevel::Aa, "gradient_descent")
                .unwrap(),
        ];

        for result in results {
            let after = contrast_ratio(&result, &target);
            assert!(
                after >= before - 1e-9,
                "Regression on {base_str} vs {target_str}: {before} -> {after}"
            );
        }
    }
}

/// Claim: an unrecognized optimization method is a hard error.
#[test]
fn unknown_optimization_method_errors() {
    let result = find_maximal_contrast_optimization(
        &color("#888888"),
        &color("white"),
        WcagLevel::Aa,
        "not_a_method",
    );
    assert!(matches!(result, Err(Error::UnknownMethod(_))));
}

/// Claim: both optimizers beat or match the plain threshold search on a
/// mid gray, since they maximize rather than stop at the threshold.
#[test]
fn optimizers_dominate_threshold_search() {
    let gray = color("#888888");
    let white = color("white");

    let threshold =
        find_accessible_color(&gray, &white, WcagLevel::Aa, LuminanceAxis::Lightness);
    let optimized =
        find_maximal_contrast_optimization(&gray, &white, WcagLevel::Aa, "golden_section")
            .unwrap();

    assert!(
        contrast_ratio(&optimized, &white) >= contrast_ratio(&threshold, &white) - 1e-9,
        "Optimizer fell below the threshold search"
    );
}

/// Claim: the whole pipeline composes — catalog palette, made accessible,
/// analyzed, rendered.
#[test]
fn catalog_to_render_pipeline() {
    let viridis = catalog().get("viridis").expect("builtin palette").clone();

    let accessible = viridis.make_accessible(&color("white"), WcagLevel::Aa);
    let analysis = accessible.analyze_contrast(&color("white"));
    assert!(
        analysis.min_contrast >= 4.5,
        "Accessible gradient still below AA: {}",
        analysis.min_contrast
    );

    let png = PngEncoder::gradient_to_bytes(&accessible, 128, 16).unwrap();
    assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

    let svg = SvgEncoder::new(128, 16).render_gradient(&accessible);
    assert!(svg.contains("<linearGradient"));

    let ansi = TerminalEncoder::new(16).render_gradient(&accessible);
    assert!(ansi.contains("\x1b[48;2;"));
}

/// Claim: palette generation and harmony analysis agree on accessibility.
#[test]
fn generated_palette_harmony_is_consistent() {
    let palette =
        generate_palette(&color("red"), PaletteScheme::Triadic, 5).expect("valid scheme");
    assert_eq!(palette.len(), 5);

    let analysis = analyze_harmony(&palette);
    assert!(analysis.min_contrast >= 1.0);
    assert!(analysis.max_contrast <= 21.0);
    assert!((0.0..=1.0).contains(&analysis.accessibility_score));
}
