//! Pix container regression test
//!
//! Tests the image container used by the filters:
//!   (1) 8 bpp byte round trip through packed words
//!   (2) Pixel access at word boundaries for every depth
//!   (3) Borders added and removed
//!   (4) Pixel difference statistics

use medfilt_core::{Error, Pix, PixelDepth};
use medfilt_test::{RegParams, synth};

/// Test 1: gray bytes survive packing for widths that do not fill a word.
#[test]
fn pix_reg_gray_bytes() {
    let mut rp = RegParams::new("pix_gray_bytes");

    for (w, h) in [(1, 1), (3, 2), (4, 4), (5, 3), (13, 7)] {
        let pix = synth::make_random(w, h, u64::from(w * 31 + h)).expect("make_random");
        let bytes = pix.to_gray_bytes().expect("to_gray_bytes");
        rp.compare_values((w * h) as f64, bytes.len() as f64, 0.0);
        rp.compare_values(w.div_ceil(4) as f64, pix.wpl() as f64, 0.0);

        let back = Pix::from_gray_bytes(w, h, &bytes).expect("from_gray_bytes");
        rp.compare_pix(&pix, &back);
    }

    let err = Pix::from_gray_bytes(3, 3, &[0; 8]);
    rp.compare_values(1.0, if err.is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "pix_gray_bytes regression test failed");
}

/// Test 2: set/get at the last pixel of each word for every depth.
#[test]
fn pix_reg_access_depths() {
    let mut rp = RegParams::new("pix_access_depths");

    let depths = [
        PixelDepth::Bit1,
        PixelDepth::Bit2,
        PixelDepth::Bit4,
        PixelDepth::Bit8,
        PixelDepth::Bit16,
        PixelDepth::Bit32,
    ];
    for depth in depths {
        let per_word = 32 / depth.bits();
        let w = per_word * 2 + 1;
        let mut pm = Pix::new(w, 2, depth).expect("Pix::new").to_mut();
        let val = depth.max_value();
        for x in [per_word - 1, per_word, w - 1] {
            pm.set_pixel(x, 1, val).expect("set_pixel");
        }
        let pix: Pix = pm.into();
        rp.compare_values(val as f64, pix.get_pixel(per_word - 1, 1).unwrap_or(0) as f64, 0.0);
        rp.compare_values(val as f64, pix.get_pixel(per_word, 1).unwrap_or(0) as f64, 0.0);
        rp.compare_values(val as f64, pix.get_pixel(w - 1, 1).unwrap_or(0) as f64, 0.0);
        if per_word >= 2 {
            rp.compare_values(0.0, pix.get_pixel(per_word - 2, 1).unwrap_or(1) as f64, 0.0);
        }
        rp.compare_values(0.0, pix.get_pixel(w - 1, 0).unwrap_or(1) as f64, 0.0);
        rp.compare_values(1.0, if pix.get_pixel(w, 0).is_none() { 1.0 } else { 0.0 }, 0.0);
    }

    let mut pm = Pix::new(2, 2, PixelDepth::Bit8).expect("Pix::new").to_mut();
    let err = pm.set_pixel(2, 0, 1);
    rp.compare_values(
        1.0,
        if matches!(err, Err(Error::IndexOutOfBounds { .. })) { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "pix_access_depths regression test failed");
}

/// Test 3: constant borders and their removal.
#[test]
fn pix_reg_border() {
    let mut rp = RegParams::new("pix_border");

    let pixs = synth::make_ramp(5, 4, 3).expect("make_ramp");
    let bordered = pixs.add_border(2, 200).expect("add_border");
    rp.compare_values(9.0, bordered.width() as f64, 0.0);
    rp.compare_values(8.0, bordered.height() as f64, 0.0);
    rp.compare_values(200.0, bordered.get_pixel(0, 0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(200.0, bordered.get_pixel(8, 7).unwrap_or(0) as f64, 0.0);
    rp.compare_values(
        pixs.get_pixel(0, 0).unwrap_or(0) as f64,
        bordered.get_pixel(2, 2).unwrap_or(0) as f64,
        0.0,
    );

    rp.compare_pix(&pixs, &bordered.remove_border(2).expect("remove_border"));
    rp.compare_values(1.0, if pixs.remove_border(2).is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "pix_border regression test failed");
}

/// Test 4: pixel difference counts.
#[test]
fn pix_reg_diffs() {
    let mut rp = RegParams::new("pix_diffs");

    let pix1 = synth::make_uniform(4, 4, 10).expect("make_uniform");
    let pix2 = synth::make_impulse(4, 4, 2, 1, 10, 50).expect("make_impulse");

    let diff = pix1.count_pixel_diffs(&pix2).expect("count_pixel_diffs");
    rp.compare_values(1.0, diff.n_diff as f64, 0.0);
    rp.compare_values(40.0, diff.max_diff as f64, 0.0);
    rp.compare_values(1.0 / 16.0, diff.fract_diff, 1e-12);
    rp.compare_values(1.0, if diff.first_diff == Some((2, 1)) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, if pix1.equals(&pix2) { 1.0 } else { 0.0 }, 0.0);

    let other = synth::make_uniform(5, 4, 10).expect("make_uniform");
    rp.compare_values(1.0, if pix1.count_pixel_diffs(&other).is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "pix_diffs regression test failed");
}
