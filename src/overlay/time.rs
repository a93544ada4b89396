//! Elapsed-time labels derived from frame index and an hours-per-frame rate.
//!
//! Elapsed hours stay float until display and are rounded only when
//! formatted. Day padding is computed once from the LAST frame's value so
//! every frame's label shares the same column width; hour padding is fixed
//! at two digits.

/// Precomputed formatting state for one sequence.
#[derive(Debug, Clone)]
pub struct TimeFormat {
    hours_per_frame: f64,
    template: String,
    pad_days: usize,
    pad_hours: usize,
}

impl TimeFormat {
    /// Build the formatter for a sequence of `total_frames` frames.
    /// `template` uses `X` for padded days and `Y` for padded hours.
    pub fn new(hours_per_frame: f64, template: &str, total_frames: usize) -> Self {
        let max_elapsed = display_hours(total_frames, hours_per_frame);
        let max_days = max_elapsed / 24;
        let pad_days = max_days.to_string().len().max(1);

        Self {
            hours_per_frame,
            template: template.to_owned(),
            pad_days,
            pad_hours: 2,
        }
    }

    /// The elapsed-time label for a 1-based frame index.
    pub fn label(&self, frame_index: usize) -> String {
        let elapsed = display_hours(frame_index, self.hours_per_frame);
        let days = elapsed / 24;
        let hours = elapsed % 24;

        self.template
            .replace('X', &zero_pad(days, self.pad_days))
            .replace('Y', &zero_pad(hours, self.pad_hours))
    }
}

/// `round((frame_index - 1) * hours_per_frame)` as whole display hours.
/// Exact `.5` values round away from zero.
fn display_hours(frame_index: usize, hours_per_frame: f64) -> i64 {
    let elapsed = (frame_index.saturating_sub(1)) as f64 * hours_per_frame;
    elapsed.round() as i64
}

fn zero_pad(value: i64, width: usize) -> String {
    format!("{value:0width$}")
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/time.rs"]
mod tests;
