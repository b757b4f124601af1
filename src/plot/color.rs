//! Diverging colour map for signed wave fields

/// Blue-White-Red color stops: deep blue -> blue -> white -> red -> deep red.
/// Blue is negative, white is zero and red is positive.
pub(crate) const BLUE_WHITE_RED_STOPS: [(f64, f64, f64); 5] = [
    (10.0, 30.0, 150.0),   // deep blue    (0.00)
    (80.0, 130.0, 230.0),  // medium blue  (0.25)
    (245.0, 245.0, 245.0), // near white   (0.50)
    (230.0, 100.0, 70.0),  // medium red   (0.75)
    (150.0, 20.0, 20.0),   // deep red     (1.00)
];

/// Background of empty panels
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Convert a \[0.0, 1.0\] value to RGB, values outside are clamped.
pub fn map_to_rgb(t: f64) -> [u8; 3] {
    let stops = &BLUE_WHITE_RED_STOPS;
    let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
    let seg = t * 4.0;
    let i = (seg as usize).min(3);
    let s = seg - i as f64;

    let (r0, g0, b0) = stops[i];
    let (r1, g1, b1) = stops[i + 1];

    [
        (r0 + s * (r1 - r0)) as u8,
        (g0 + s * (g1 - g0)) as u8,
        (b0 + s * (b1 - b0)) as u8,
    ]
}
