use crate::animation::values::Interpolatable;

/// How many frames to scan linearly from the cursor before falling back
/// to a binary search.
const MAX_SCAN_OFFSET: usize = 3;

/// Remembers the last sampled keyframe index of a track.
///
/// Playback advances monotonically almost every frame, so a short linear
/// scan from the previous index resolves the bracketing pair in O(1);
/// large jumps (loop reset, hard cut) fall back to a binary search.
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// An ordered sequence of keyframes over a single value channel.
///
/// Times must be strictly increasing with the first entry at 0; this is
/// validated at clip construction, not here. Sampling outside the span
/// `[times.first(), times.last()]` is a deliberate no-op (`None`): the
/// driven value simply stops updating, holding whatever the last write
/// left in place.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>) -> Self {
        Self { times, values }
    }

    /// Stateless sample via binary search. `None` outside the track span.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        self.span_check(time)?;

        // partition_point finds the first index with t > time, i.e. the
        // next frame; the bracketing frame is the one before it.
        let next = self.times.partition_point(|&t| t <= time);
        Some(self.sample_at_frame(next.saturating_sub(1), time))
    }

    /// Cursor-accelerated sample. `None` outside the track span.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> Option<T> {
        self.span_check(time)?;

        let len = self.times.len();
        if len == 1 {
            return Some(self.values[0]);
        }

        // Cursor may be stale after a clip switch.
        let i = cursor.last_index.min(len - 1);
        let t_curr = self.times[i];

        let found = if time >= t_curr {
            // Normal playback: scan forward a few frames.
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    if time >= self.times[len - 1] {
                        res = Some(len - 1);
                    }
                    break;
                }
                if time < self.times[idx + 1] {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            // Loop reset or rewind: scan backward.
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                if i < offset {
                    break;
                }
                let idx = i - offset;
                if time >= self.times[idx] {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let index = match found {
            Some(idx) => idx,
            None => {
                // Large jump: binary search fallback.
                let next = self.times.partition_point(|&t| t <= time);
                next.saturating_sub(1)
            }
        };

        cursor.last_index = index;
        Some(self.sample_at_frame(index, time))
    }

    fn span_check(&self, time: f32) -> Option<()> {
        let first = *self.times.first()?;
        let last = *self.times.last()?;
        if time < first || time > last {
            return None;
        }
        Some(())
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let len = self.times.len();

        if index >= len - 1 {
            return self.values[len - 1];
        }

        let t0 = self.times[index];
        let t1 = self.times[index + 1];
        let dt = t1 - t0;

        // Zero-length segments blend as t = 0.
        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        T::interpolate_linear(self.values[index], self.values[index + 1], t)
    }
}
