//! Pixel format conversion helpers for presentation adapters.

/// Unpacks ARGB8888 pixels into RGBA bytes with alpha forced to 255.
///
/// # Panics
/// Panics if `dst.len()` is not `src.len() * 4`.
pub fn copy_argb_to_rgba(src: &[u32], dst: &mut [u8]) {
    assert_eq!(
        dst.len(),
        src.len() * 4,
        "dst length {} does not match expected {}",
        dst.len(),
        src.len() * 4
    );

    for (&argb, rgba) in src.iter().zip(dst.chunks_exact_mut(4)) {
        let [_, r, g, b] = argb.to_be_bytes();
        rgba.copy_from_slice(&[r, g, b, 255]);
    }
}

/// Drops the alpha byte of every pixel, giving packed RGB triples.
#[must_use]
pub fn argb_to_rgb_bytes(src: &[u32]) -> Vec<u8> {
    src.iter()
        .flat_map(|argb| {
            let [_, r, g, b] = argb.to_be_bytes();
            [r, g, b]
        })
        .collect()
}
