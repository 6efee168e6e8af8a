//! src/evaluator/report.rs
//! What a region scan found.

/// One observation made while walking the region block by block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    /// A block that does not decode under the key.
    ///
    /// `leading` is true for the first block of a run of invalid blocks.
    Invalid {
        offset: u64,
        alignment: u64,
        leading: bool,
    },
    /// First valid block after the start of the region or after invalid data.
    Initial { offset: u64, counter: u64 },
    /// A valid block whose counter does not follow its predecessor.
    ///
    /// When `gap_bytes` equals the region length this is the expected seam
    /// between the newest pass and the one before it.
    Discontinuity {
        offset: u64,
        alignment: u64,
        previous: u64,
        current: u64,
        gap_bytes: u128,
        wraparound: bool,
    },
}

/// Result of scanning one region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionEvaluation {
    /// Region start in bytes.
    pub offset: u64,
    /// Region length in bytes.
    pub length: u64,
    /// Blocks inspected.
    pub blocks: u64,
    /// Total blocks that did not decode.
    pub invalid_blocks: u64,
    /// Everything noteworthy, in file order.
    pub findings: Vec<Finding>,
}

impl RegionEvaluation {
    /// Discontinuities that are not explained by a pass boundary.
    pub fn unexpected_discontinuities(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| matches!(f, Finding::Discontinuity { wraparound: false, .. }))
    }

    pub fn wraparounds(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| matches!(f, Finding::Discontinuity { wraparound: true, .. }))
            .count()
    }

    /// No invalid blocks and no discontinuities other than pass boundaries.
    pub fn is_consistent(&self) -> bool {
        self.invalid_blocks == 0 && self.unexpected_discontinuities().next().is_none()
    }
}
