//! Row-band execution
//!
//! The output buffer is split into bands of whole rows. Each band is filled
//! by an independent scan that starts from its own first row, so the result
//! does not depend on how the rows are split.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fewest rows given to one parallel band.
#[cfg(feature = "parallel")]
const MIN_BAND_ROWS: usize = 32;

/// Fill `out` (row-major, `width` samples per row) band by band.
///
/// `fill_band(first_row, band)` receives the index of the band's first
/// output row and the band's slice of `out`.
pub(crate) fn run_bands<F>(out: &mut [u8], width: usize, fill_band: F)
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    if out.is_empty() {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        let rows = out.len() / width;
        let band_rows = rows
            .div_ceil(rayon::current_num_threads())
            .max(MIN_BAND_ROWS);
        out.par_chunks_mut(band_rows * width)
            .enumerate()
            .for_each(|(i, band)| {
                let first_row = i * band_rows;
                tracing::trace!(first_row, rows = band.len() / width, "filter band");
                fill_band(first_row, band);
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        tracing::trace!(rows = out.len() / width, "filter band");
        fill_band(0, out);
    }
}
