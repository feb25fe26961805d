//! Layer width schedules
//!
//! A schedule is the list of per-layer widths used to build a stack of
//! recurrent layers whose capacity changes gradually instead of in one jump.
//!
//! ```rust
//! use seqae::schedule::{decoder_schedule, encoder_schedule, plan_widths};
//!
//! assert_eq!(plan_widths(64, 16, 2).unwrap(), vec![64, 40, 16]);
//! assert_eq!(encoder_schedule(128, 64, 16, 3).unwrap(), vec![128, 64, 40, 16]);
//! assert_eq!(decoder_schedule(16, 64, 3).unwrap(), vec![16, 40, 64]);
//! ```

use crate::error::{ModelError, Result};

/// Evenly interpolate `num_layers + 1` integer widths from `start` to `end`.
///
/// Both endpoints are included. Interior values are rounded half up from the
/// exact rational `(start * (n - i) + end * i) / n`, which keeps the result
/// monotonic and makes `plan_widths(b, a, n)` the reverse of `plan_widths(a, b, n)`.
///
/// # Errors
/// [`ModelError::ZeroLayers`] if `num_layers == 0`, [`ModelError::ZeroWidth`]
/// if either endpoint is zero.
pub fn plan_widths(start: usize, end: usize, num_layers: usize) -> Result<Vec<usize>> {
    if num_layers == 0 {
        return Err(ModelError::ZeroLayers);
    }
    if start == 0 {
        return Err(ModelError::ZeroWidth { field: "start" });
    }
    if end == 0 {
        return Err(ModelError::ZeroWidth { field: "end" });
    }

    let n = num_layers as u128;
    let (a, b) = (start as u128, end as u128);
    let widths = (0..=n)
        .map(|i| {
            let numerator = a * (n - i) + b * i;
            ((2 * numerator + n) / (2 * n)) as usize
        })
        .collect();

    Ok(widths)
}

/// Widths for an encoder of `num_layers` recurrent layers.
///
/// The true input width comes first, followed by an interpolation from
/// `first_layer_size` to `encoding_size`. A single layer maps the input
/// straight to the encoding. The result always has `num_layers + 1` entries.
pub fn encoder_schedule(
    input_size: usize,
    first_layer_size: usize,
    encoding_size: usize,
    num_layers: usize,
) -> Result<Vec<usize>> {
    if input_size == 0 {
        return Err(ModelError::ZeroWidth {
            field: "input_size",
        });
    }
    if first_layer_size == 0 {
        return Err(ModelError::ZeroWidth {
            field: "first_layer_size",
        });
    }

    match num_layers {
        0 => Err(ModelError::ZeroLayers),
        1 => plan_widths(input_size, encoding_size, 1),
        n => {
            let mut widths = Vec::with_capacity(n + 1);
            widths.push(input_size);
            widths.extend(plan_widths(first_layer_size, encoding_size, n - 1)?);
            Ok(widths)
        }
    }
}

/// Widths for a decoder mirroring an encoder of `num_layers` layers.
///
/// Has `num_layers` entries starting at `encoding_size`; only the
/// `num_layers - 1` transitions between them become recurrent layers. The
/// output projection takes over from the last entry.
pub fn decoder_schedule(
    encoding_size: usize,
    last_layer_size: usize,
    num_layers: usize,
) -> Result<Vec<usize>> {
    if encoding_size == 0 {
        return Err(ModelError::ZeroWidth {
            field: "encoding_size",
        });
    }
    if last_layer_size == 0 {
        return Err(ModelError::ZeroWidth {
            field: "last_layer_size",
        });
    }

    match num_layers {
        0 => Err(ModelError::ZeroLayers),
        1 => Ok(vec![encoding_size]),
        n => plan_widths(encoding_size, last_layer_size, n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_layer_is_endpoints() {
        assert_eq!(plan_widths(128, 16, 1).unwrap(), vec![128, 16]);
    }

    #[test]
    fn test_constant_width() {
        assert_eq!(plan_widths(32, 32, 4).unwrap(), vec![32; 5]);
    }

    #[test]
    fn test_rounding_repeats_values() {
        // 3 -> 2 over four steps cannot be strictly monotonic
        let widths = plan_widths(3, 2, 4).unwrap();
        assert_eq!(widths.len(), 5);
        assert_eq!(widths, vec![3, 3, 3, 2, 2]);
    }

    #[test]
    fn test_half_values_mirror() {
        let down = plan_widths(10, 5, 2).unwrap();
        let mut up = plan_widths(5, 10, 2).unwrap();
        up.reverse();
        assert_eq!(down, up);
    }

    #[test]
    fn test_zero_layers_rejected() {
        assert!(matches!(plan_widths(8, 4, 0), Err(ModelError::ZeroLayers)));
        assert!(matches!(
            encoder_schedule(8, 4, 2, 0),
            Err(ModelError::ZeroLayers)
        ));
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(
            plan_widths(0, 4, 2),
            Err(ModelError::ZeroWidth { field: "start" })
        ));
        assert!(matches!(
            encoder_schedule(8, 0, 2, 2),
            Err(ModelError::ZeroWidth {
                field: "first_layer_size"
            })
        ));
        assert!(matches!(
            decoder_schedule(0, 4, 2),
            Err(ModelError::ZeroWidth {
                field: "encoding_size"
            })
        ));
    }

    #[test]
    fn test_encoder_decoder_mirror() {
        let encoder = encoder_schedule(128, 64, 16, 4).unwrap();
        let mut decoder = decoder_schedule(16, 64, 4).unwrap();
        decoder.reverse();
        assert_eq!(&encoder[1..], decoder.as_slice());
    }

    #[test]
    fn test_degenerate_single_layer() {
        assert_eq!(encoder_schedule(128, 64, 16, 1).unwrap(), vec![128, 16]);
        assert_eq!(decoder_schedule(16, 64, 1).unwrap(), vec![16]);
    }
}
