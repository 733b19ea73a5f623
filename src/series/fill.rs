/// Fills undefined values by linear interpolation between the nearest
/// defined neighbours, weighted by position.
///
/// Leading undefined values stay undefined; trailing ones repeat the last
/// defined value.
#[must_use]
pub fn interpolate_linear(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut filled = values.to_vec();
    let mut last_known: Option<(usize, f64)> = None;

    for (idx, value) in values.iter().enumerate() {
        let Some(value) = *value else { continue };
        if let Some((prev_idx, prev_value)) = last_known
            && idx > prev_idx.saturating_add(1)
        {
            let span = idx.saturating_sub(prev_idx) as f64;
            let slope = (value - prev_value) / span;
            let gap = filled
                .get_mut(prev_idx.saturating_add(1)..idx)
                .unwrap_or_default();
            for (step, slot) in gap.iter_mut().enumerate() {
                let distance = step.saturating_add(1) as f64;
                *slot = Some(prev_value + slope * distance);
            }
        }
        last_known = Some((idx, value));
    }

    if let Some((last_idx, last_value)) = last_known {
        for slot in filled.iter_mut().skip(last_idx.saturating_add(1)) {
            *slot = Some(last_value);
        }
    }

    filled
}
