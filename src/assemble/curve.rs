//! Lateral offset tracking along elongated components.

/// Accumulates the rounded lateral offset of each row.
///
/// Only the final row's offset leaves the component that drew it.
#[derive(Debug, Clone, Default)]
pub struct CurveAccumulator {
    rows: Vec<(u32, i32)>,
}

impl CurveAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `offset` at `row`, round it, store it and return it.
    pub fn accumulate(&mut self, row: u32, offset: impl Fn(u32) -> f64) -> i32 {
        let value = offset(row).round() as i32;
        self.rows.push((row, value));
        value
    }

    /// Offset of the last accumulated row, or 0 when nothing was drawn.
    pub fn final_offset(&self) -> i32 {
        self.rows.last().map_or(0, |&(_, v)| v)
    }

    pub fn rows_seen(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::CenterLine;

    #[test]
    fn test_empty_final_offset() {
        assert_eq!(CurveAccumulator::new().final_offset(), 0);
    }

    #[test]
    fn test_curved_blade_final_offset() {
        let center = CenterLine::Curved { amount: 6.0 };
        let mut curve = CurveAccumulator::new();
        let mut last = 0;
        for row in 0..40 {
            last = curve.accumulate(row, |r| center.offset_at(r, 40));
        }
        assert_eq!(curve.final_offset(), last);
        assert_eq!(curve.final_offset(), 6);
        assert_eq!(curve.rows_seen(), 40);
    }

    #[test]
    fn test_rounding() {
        let mut curve = CurveAccumulator::new();
        assert_eq!(curve.accumulate(0, |_| 1.6), 2);
        assert_eq!(curve.accumulate(1, |_| -1.6), -2);
        assert_eq!(curve.final_offset(), -2);
    }
}
