//! Border extension by edge replication
//!
//! Every filter in this crate pads its input with this function so that
//! each output pixel sees a full window without special-casing the edges.

use crate::{FilterError, FilterResult};
use medfilt_core::Pix;

/// Extend an image by replicating edge pixels.
///
/// Creates a new image with dimensions `(w + 2*extend_x, h + 2*extend_y)`.
/// The source image is placed at offset `(extend_x, extend_y)`; every pixel
/// outside it copies the nearest in-range column and/or row, so the corners
/// take the value of the corresponding corner pixel. Works for any pixel
/// depth.
///
/// Zero extension returns an independent copy of the input.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if the new size overflows.
///
/// # Examples
///
/// ```
/// use medfilt_core::Pix;
/// use medfilt_filter::extend_by_replication;
///
/// let pix = Pix::from_gray_bytes(2, 1, &[10, 20]).unwrap();
/// let ext = extend_by_replication(&pix, 1, 1).unwrap();
/// assert_eq!(ext.to_gray_bytes().unwrap(), vec![
///     10, 10, 20, 20,
///     10, 10, 20, 20,
///     10, 10, 20, 20,
/// ]);
/// ```
pub fn extend_by_replication(pix: &Pix, extend_x: u32, extend_y: u32) -> FilterResult<Pix> {
    let w = pix.width();
    let h = pix.height();

    if extend_x == 0 && extend_y == 0 {
        return Ok(pix.deep_clone());
    }

    let new_w = extend_x
        .checked_mul(2)
        .and_then(|d| w.checked_add(d))
        .ok_or_else(|| FilterError::InvalidParameters("resulting width overflow".into()))?;
    let new_h = extend_y
        .checked_mul(2)
        .and_then(|d| h.checked_add(d))
        .ok_or_else(|| FilterError::InvalidParameters("resulting height overflow".into()))?;

    let mut out_mut = Pix::new(new_w, new_h, pix.depth())?.to_mut();
    out_mut.set_spp(pix.spp());

    // Source column for every destination column, computed once.
    let src_x: Vec<u32> = (0..new_w)
        .map(|x| x.saturating_sub(extend_x).min(w - 1))
        .collect();

    for y in 0..new_h {
        let sy = y.saturating_sub(extend_y).min(h - 1);
        for (x, &sx) in src_x.iter().enumerate() {
            out_mut.set_pixel_unchecked(x as u32, y, pix.get_pixel_unchecked(sx, sy));
        }
    }

    Ok(out_mut.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medfilt_core::PixelDepth;

    fn create_3x3() -> Pix {
        Pix::from_gray_bytes(3, 3, &[10, 20, 30, 40, 50, 60, 70, 80, 90]).unwrap()
    }

    #[test]
    fn test_extend_replicates_edges_and_corners() {
        let result = extend_by_replication(&create_3x3(), 1, 1).unwrap();

        assert_eq!(result.width(), 5);
        assert_eq!(result.height(), 5);
        // Corners
        assert_eq!(result.get_pixel_unchecked(0, 0), 10);
        assert_eq!(result.get_pixel_unchecked(4, 0), 30);
        assert_eq!(result.get_pixel_unchecked(0, 4), 70);
        assert_eq!(result.get_pixel_unchecked(4, 4), 90);
        // Edges
        assert_eq!(result.get_pixel_unchecked(2, 0), 20);
        assert_eq!(result.get_pixel_unchecked(0, 2), 40);
        assert_eq!(result.get_pixel_unchecked(4, 2), 60);
        assert_eq!(result.get_pixel_unchecked(2, 4), 80);
        // Interior is shifted by the extension
        assert_eq!(result.get_pixel_unchecked(2, 2), 50);
    }

    #[test]
    fn test_extend_wider_than_image() {
        let pix = Pix::from_gray_bytes(1, 1, &[7]).unwrap();
        let result = extend_by_replication(&pix, 4, 2).unwrap();
        assert_eq!(result.width(), 9);
        assert_eq!(result.height(), 5);
        assert!(result.to_gray_bytes().unwrap().iter().all(|&v| v == 7));
    }

    #[test]
    fn test_extend_asymmetric() {
        let result = extend_by_replication(&create_3x3(), 2, 0).unwrap();
        assert_eq!(result.width(), 7);
        assert_eq!(result.height(), 3);
        assert_eq!(result.get_pixel_unchecked(0, 1), 40);
        assert_eq!(result.get_pixel_unchecked(6, 1), 60);
    }

    #[test]
    fn test_extend_zero_is_independent_copy() {
        let pix = create_3x3();
        let result = extend_by_replication(&pix, 0, 0).unwrap();
        assert!(result.equals(&pix));
        assert_eq!(pix.ref_count(), 1);
    }

    #[test]
    fn test_extend_other_depths() {
        let pix = Pix::new(2, 2, PixelDepth::Bit16).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_pixel_unchecked(1, 1, 60000);
        let pix: Pix = pm.into();

        let result = extend_by_replication(&pix, 2, 2).unwrap();
        assert_eq!(result.depth(), PixelDepth::Bit16);
        assert_eq!(result.get_pixel_unchecked(5, 5), 60000);
        assert_eq!(result.get_pixel_unchecked(0, 0), 0);
    }

    #[test]
    fn test_extend_overflow() {
        let pix = create_3x3();
        assert!(extend_by_replication(&pix, u32::MAX, 1).is_err());
    }
}
