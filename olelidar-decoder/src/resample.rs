use crate::error::OleiLidarError;

/// Resample `input` onto a uniform grid of `output_len` values by linear
/// interpolation over the input index range. The first and last input values
/// anchor the output ends exactly; stretching and shrinking share the same
/// formula. Values are rounded to the nearest input unit.
pub(crate) fn resample(input: &[u16], output_len: usize) -> Result<Vec<u16>, OleiLidarError> {
    let n_in = input.len();
    if n_in < 2 {
        return Err(OleiLidarError::InsufficientSamples(n_in));
    }
    if output_len < 2 {
        return Err(OleiLidarError::InsufficientSamples(output_len));
    }
    // Equal lengths must reproduce the input element for element, with no
    // room for rounding drift.
    if n_in == output_len {
        return Ok(input.to_vec());
    }

    let div = (n_in - 1) as f32 / (output_len - 1) as f32;
    let mut output = Vec::with_capacity(output_len);
    output.push(input[0]);
    for i in 1..output_len - 1 {
        let pos = div * i as f32;
        let lo = (pos as usize).min(n_in - 2);
        let frac = pos - lo as f32;
        let diff = input[lo + 1] as f32 - input[lo] as f32;
        let value = input[lo] as f32 + diff * frac;
        output.push(value.round() as u16);
    }
    output.push(input[n_in - 1]);
    Ok(output)
}
