const FULL: char = '█';
const DONE: char = '▓';
const REMAINING: char = '░';
const EMPTY: char = '·';

/// A horizontal meter `columns` wide filled to `percent` (clamped to 0..=100).
pub fn meter(percent: f64, columns: usize) -> String {
    let fraction = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * columns as f64).round() as usize;
    let mut out = String::with_capacity(columns * 3);
    out.extend(std::iter::repeat_n(FULL, filled));
    out.extend(std::iter::repeat_n(REMAINING, columns - filled));
    out
}

/// One Gantt row. `offset` and `width` are fractions of the whole span; the
/// bar always occupies at least one column and never runs past the track.
/// The done share of the bar follows `progress` percent.
pub fn gantt_track(offset: f64, width: f64, progress: f64, columns: usize) -> String {
    if columns == 0 {
        return String::new();
    }

    let start = ((offset.max(0.0) * columns as f64).round() as usize).min(columns - 1);
    let length = ((width.max(0.0) * columns as f64).round() as usize)
        .max(1)
        .min(columns - start);
    let done = ((progress.clamp(0.0, 100.0) / 100.0) * length as f64).round() as usize;

    let mut out = String::with_capacity(columns * 3);
    out.extend(std::iter::repeat_n(EMPTY, start));
    out.extend(std::iter::repeat_n(DONE, done));
    out.extend(std::iter::repeat_n(REMAINING, length - done));
    out.extend(std::iter::repeat_n(EMPTY, columns - start - length));
    out
}
