//! Cumulative-weight index for ordered weighted sampling.

use rand::Rng;

/// Upper bound of one entry's interval plus the entry's position in the
/// source slice.
#[derive(Debug, Clone, Copy)]
struct Slot {
    cum: f64,
    pos: usize,
}

/// Running-total table over a slice of chances.
///
/// Slots are ordered by descending chance (ties keep source order), so the
/// most common entry owns the interval starting at zero; the luck remap in
/// [`pick`](Self::pick) relies on that. Each entry covers the half-open range
/// `[previous total, previous total + chance)`; a draw value landing exactly
/// on a boundary belongs to the entry starting there.
///
/// Chances that are non-finite or not strictly positive are skipped at build
/// time: they own no interval and can never be picked.
#[derive(Debug, Clone, Default)]
pub struct CumulativeIndex {
    slots: Vec<Slot>,
    total: f64,
}

impl CumulativeIndex {
    /// Build an index from raw chances. O(n log n).
    pub fn new(chances: &[f64]) -> Self {
        let mut order: Vec<(usize, f64)> = chances
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, c)| c.is_finite() && c > 0.0)
            .collect();
        order.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut slots = Vec::with_capacity(order.len());
        let mut total = 0.0f64;
        for (pos, chance) in order {
            total += chance;
            slots.push(Slot { cum: total, pos });
        }
        Self { slots, total }
    }

    /// Map a draw value to the position whose interval contains it.
    ///
    /// `r` is expected in `[0, total)`; out-of-range values resolve to the
    /// nearest end, which also absorbs `u * total` rounding up to `total`.
    /// `None` only when the index is empty.
    pub fn locate(&self, r: f64) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }
        let i = self.slots.partition_point(|s| s.cum <= r);
        Some(self.slots[i.min(self.slots.len() - 1)].pos)
    }

    /// Draw one position, biased by `luck`.
    ///
    /// The uniform draw `u` in `[0, 1)` is remapped to `u^luck` before
    /// scaling into the weight range: multipliers above 1 squeeze draws
    /// toward the highest-chance entries, multipliers in `(0, 1)` stretch
    /// them toward the rarest, and exactly 1 leaves the draw untouched.
    /// Non-finite or non-positive multipliers count as 1.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R, luck: f64) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }
        let mut u: f64 = rng.random();
        if luck.is_finite() && luck > 0.0 && luck != 1.0 {
            u = u.powf(luck);
        }
        self.locate(u * self.total)
    }

    /// Sum of the chances that made it into the index.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of drawable entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
