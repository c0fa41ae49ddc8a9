/// Clamps `amt` into `[low, high]`.
#[inline]
pub fn constrain<T: PartialOrd>(amt: T, low: T, high: T) -> T {
    if amt < low {
        low
    } else if amt > high {
        high
    } else {
        amt
    }
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn dist(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    mag(x2 - x1, y2 - y1)
}

#[inline]
pub fn lerp(start: f32, stop: f32, amt: f32) -> f32 {
    start + (stop - start) * amt
}

/// Length of the vector `(a, b)`.
#[inline]
pub fn mag(a: f32, b: f32) -> f32 {
    (a * a + b * b).sqrt()
}

/// Re-maps `value` from `[start1, stop1]` to `[start2, stop2]`. Not clamped.
#[inline]
pub fn map(value: f32, start1: f32, stop1: f32, start2: f32, stop2: f32) -> f32 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}

/// Normalizes `value` from `[start, stop]` to `[0, 1]`. Not clamped.
#[inline]
pub fn norm(value: f32, start: f32, stop: f32) -> f32 {
    (value - start) / (stop - start)
}

#[inline]
pub fn sq(n: f32) -> f32 {
    n * n
}

#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians.to_degrees()
}

#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees.to_radians()
}
