//! src/evaluator/scan.rs
//! Walk a written region, decode every block and classify it.

use crate::aliases::{Aes128Key16, Block};
use crate::consts::BLOCK_SIZE;
use crate::crypto::keystream::KeystreamDecoder;
use crate::error::PrngbbError;
use crate::evaluator::report::{Finding, RegionEvaluation};
use crate::utils::alignment_of;
use std::io::{Read, Seek, SeekFrom};
use tracing::debug;

/// Scan `length / 16` blocks starting at `offset`.
///
/// The reader must hold at least `offset + length` bytes; running out of data
/// is reported as an I/O error.
pub fn evaluate_region<R: Read + Seek>(
    mut reader: R,
    key: &Aes128Key16,
    offset: u64,
    length: u64,
) -> Result<RegionEvaluation, PrngbbError> {
    let decoder = KeystreamDecoder::new(key);
    let blocks = length / BLOCK_SIZE as u64;

    reader.seek(SeekFrom::Start(offset))?;

    let mut evaluation = RegionEvaluation {
        offset,
        length,
        blocks,
        ..Default::default()
    };

    let mut previous: Option<u64> = None;
    let mut in_invalid_run = false;
    let mut block: Block = [0u8; BLOCK_SIZE];

    for index in 0..blocks {
        let block_offset = offset + index * BLOCK_SIZE as u64;
        reader.read_exact(&mut block)?;

        let Some(counter) = decoder.decode(&block) else {
            evaluation.invalid_blocks += 1;
            evaluation.findings.push(Finding::Invalid {
                offset: block_offset,
                alignment: alignment_of(block_offset),
                leading: !in_invalid_run,
            });
            previous = None;
            in_invalid_run = true;
            continue;
        };
        in_invalid_run = false;

        match previous {
            None => evaluation.findings.push(Finding::Initial {
                offset: block_offset,
                counter,
            }),
            Some(prev) if u128::from(prev) + 1 != u128::from(counter) => {
                let gap_bytes =
                    (u128::from(prev) + 1).abs_diff(u128::from(counter)) * BLOCK_SIZE as u128;
                evaluation.findings.push(Finding::Discontinuity {
                    offset: block_offset,
                    alignment: alignment_of(block_offset),
                    previous: prev,
                    current: counter,
                    gap_bytes,
                    wraparound: gap_bytes == u128::from(length),
                });
            }
            Some(_) => {}
        }
        previous = Some(counter);
    }

    debug!(
        blocks,
        invalid = evaluation.invalid_blocks,
        findings = evaluation.findings.len(),
        "region scanned"
    );

    Ok(evaluation)
}
