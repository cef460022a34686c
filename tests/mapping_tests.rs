// Host-side tests for the scroll and pointer mappings.

use missed_call_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn scroll_fraction_mid_transition() {
    // Section 1 bottom at -50, section 2 top at 300, both 800 tall, viewport 800
    let a = Rect::new(0.0, -850.0, 1200.0, 800.0);
    let b = Rect::new(0.0, 300.0, 1200.0, 800.0);
    let f = scroll_fraction(&a, &b, 800.0);
    assert!(approx(f, 0.34375));

    let v = fade_volume(0.3, f);
    assert!(approx(v, 0.196875));
}

#[test]
fn scroll_fraction_before_second_section_arrives() {
    let a = Rect::new(0.0, 0.0, 1200.0, 800.0);
    let b = Rect::new(0.0, 800.0, 1200.0, 800.0);
    assert_eq!(scroll_fraction(&a, &b, 800.0), 0.0);

    // Further down the page still reads zero
    let b_far = Rect::new(0.0, 2400.0, 1200.0, 800.0);
    assert_eq!(scroll_fraction(&a, &b_far, 800.0), 0.0);
}

#[test]
fn scroll_fraction_after_first_section_left() {
    let a = Rect::new(0.0, -800.0, 1200.0, 800.0);
    let b = Rect::new(0.0, 0.0, 1200.0, 800.0);
    assert_eq!(scroll_fraction(&a, &b, 800.0), 1.0);

    let a_far = Rect::new(0.0, -2000.0, 1200.0, 800.0);
    let b_far = Rect::new(0.0, -1200.0, 1200.0, 800.0);
    assert_eq!(scroll_fraction(&a_far, &b_far, 800.0), 1.0);
}

#[test]
fn scroll_fraction_stays_in_unit_range() {
    for step in 0..=64 {
        let scroll = step as f64 * 50.0;
        let a = Rect::new(0.0, -scroll, 1000.0, 800.0);
        let b = Rect::new(0.0, 800.0 - scroll, 1000.0, 800.0);
        let f = scroll_fraction(&a, &b, 800.0);
        assert!((0.0..=1.0).contains(&f), "fraction {} at scroll {}", f, scroll);
    }
}

#[test]
fn scroll_fraction_handles_zero_height_sections() {
    let a = Rect::new(0.0, 100.0, 1000.0, 0.0);
    let b = Rect::new(0.0, 100.0, 1000.0, 0.0);
    let f = scroll_fraction(&a, &b, 800.0);
    assert!(f.is_finite());
    assert!((0.0..=1.0).contains(&f));
}

#[test]
fn fade_volume_bounded_and_strictly_decreasing() {
    let base = 0.3;
    let mut prev = f32::INFINITY;
    for step in 0..=100 {
        let f = step as f32 / 100.0;
        let v = fade_volume(base, f);
        assert!((0.0..=base).contains(&v));
        assert!(v < prev, "volume must drop as the fraction rises");
        prev = v;
    }
    assert_eq!(fade_volume(base, 0.0), base);
    assert_eq!(fade_volume(base, 1.0), 0.0);
}

#[test]
fn fade_volume_clamps_out_of_range_fractions() {
    assert_eq!(fade_volume(0.3, -2.0), 0.3);
    assert_eq!(fade_volume(0.3, 5.0), 0.0);
    assert_eq!(fade_volume(0.3, f32::NAN), 0.3);
}

#[test]
fn pointer_intensity_relative_to_section() {
    let section = Rect::new(100.0, 0.0, 800.0, 800.0);
    assert_eq!(pointer_intensity(100.0, &section), Some(0.0));
    assert_eq!(pointer_intensity(500.0, &section), Some(0.5));
    assert_eq!(pointer_intensity(900.0, &section), Some(1.0));
    // Outside the section clamps to the edges
    assert_eq!(pointer_intensity(0.0, &section), Some(0.0));
    assert_eq!(pointer_intensity(2000.0, &section), Some(1.0));
}

#[test]
fn pointer_intensity_needs_a_width() {
    let flat = Rect::new(100.0, 0.0, 0.0, 800.0);
    assert_eq!(pointer_intensity(150.0, &flat), None);
    let section = Rect::new(0.0, 0.0, 800.0, 800.0);
    assert_eq!(pointer_intensity(f64::NAN, &section), None);
}

#[test]
fn gradient_follows_asymmetric_interpolation() {
    // Far left: both stops white
    assert_eq!(Gradient::for_intensity(0.0), Gradient { left: 255, right: 255 });
    // Centre: white to black
    assert_eq!(Gradient::for_intensity(0.5), Gradient { left: 255, right: 0 });
    // Far right: both stops black
    assert_eq!(Gradient::for_intensity(1.0), Gradient { left: 0, right: 0 });

    // Left half only moves the right stop, right half only the left stop
    let quarter = Gradient::for_intensity(0.25);
    assert_eq!(quarter.left, 255);
    assert_eq!(quarter.right, 128);
    let three_quarters = Gradient::for_intensity(0.75);
    assert_eq!(three_quarters.left, 128);
    assert_eq!(three_quarters.right, 0);
}

#[test]
fn gradient_centre_is_neutral() {
    assert_eq!(Gradient::for_intensity(0.5), Gradient::NEUTRAL);
}

#[test]
fn gradient_css_value() {
    let css = Gradient { left: 255, right: 0 }.css();
    assert_eq!(
        css,
        "linear-gradient(90deg, rgb(255, 255, 255) 0%, rgb(0, 0, 0) 100%)"
    );
}

#[test]
fn cross_fade_tracks_are_exclusive() {
    for step in 0..=200 {
        let i = step as f32 / 200.0;
        let fade = CrossFade::for_intensity(i, AMBIENT_PEAK_VOLUME);
        assert!(
            fade.birds == 0.0 || fade.thunder == 0.0,
            "both tracks audible at {}",
            i
        );
        assert!(fade.birds <= AMBIENT_PEAK_VOLUME && fade.thunder <= AMBIENT_PEAK_VOLUME);
    }
}

#[test]
fn cross_fade_levels() {
    let left = CrossFade::for_intensity(0.0, 0.8);
    assert!(approx(left.birds, 0.8));
    assert_eq!(left.thunder, 0.0);

    let right = CrossFade::for_intensity(1.0, 0.8);
    assert_eq!(right.birds, 0.0);
    assert!(approx(right.thunder, 0.8));

    let centre = CrossFade::for_intensity(0.5, 0.8);
    assert_eq!(centre.birds, 0.0);
    assert_eq!(centre.thunder, 0.0);

    let quarter = CrossFade::for_intensity(0.25, 0.8);
    assert!(approx(quarter.birds, 0.4));
}

#[test]
fn clamp01_maps_nan_to_zero() {
    assert_eq!(clamp01(f32::NAN), 0.0);
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(1.5), 1.0);
    assert_eq!(clamp01(0.3), 0.3);
}
