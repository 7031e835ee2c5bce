use quadterrain_core::prelude::*;

// These return raw buffers instead of a `Heightmap`. Depending on `quadterrain_storage` here would give its unit tests a
// second, incompatible copy of the storage types: https://github.com/rust-lang/cargo/issues/6765

/// A square of smooth hills with the given `wavelength`, quantized to integer heights in `[0, 64]`.
///
/// Neighbouring cells often share a height, so the data compresses into a mix of large leaves and fine detail.
pub fn rolling_hills(minimum: Point2i, edge_length: i32, wavelength: i32) -> (Extent2i, Vec<u16>) {
    let extent = Extent2i::from_min_and_shape(minimum, Point2i::fill(edge_length));
    let k = std::f32::consts::TAU / wavelength as f32;
    let values = extent
        .iter_points()
        .map(|p| {
            let s = (p.x() as f32 * k).sin() * (p.y() as f32 * k).cos();
            ((s + 1.0) * 32.0).round() as u16
        })
        .collect();

    (extent, values)
}

/// Alternating `a` and `b` cells, with `a` on cells whose coordinates sum to an even number. Nothing can be merged.
pub fn checkerboard(minimum: Point2i, edge_length: i32, a: u16, b: u16) -> (Extent2i, Vec<u16>) {
    let extent = Extent2i::from_min_and_shape(minimum, Point2i::fill(edge_length));
    let values = extent
        .iter_points()
        .map(|p| if (p.x() + p.y()).rem_euclid(2) == 0 { a } else { b })
        .collect();

    (extent, values)
}

/// Flat terraces of `step` cells along x, each one unit higher than the last.
pub fn terraces(minimum: Point2i, edge_length: i32, step: i32) -> (Extent2i, Vec<u16>) {
    let extent = Extent2i::from_min_and_shape(minimum, Point2i::fill(edge_length));
    let values = extent
        .iter_points()
        .map(|p| (p.x() - minimum.x()).div_euclid(step) as u16)
        .collect();

    (extent, values)
}
