//! tests/config_tests.rs
//! Region geometry validation

use prngbb_rs::consts::{BLOCK_SIZE, KIB};
use prngbb_rs::{PrngbbError, RegionConfig};

#[test]
fn reference_scenario_geometry() {
    let config = RegionConfig::from_kib(256, 0, 4096).unwrap();

    assert_eq!(config.buffer_size(), 4_194_304);
    assert_eq!(config.chunk_size(), 4096);
    assert_eq!(config.block_count(), 1024);
    assert_eq!(config.blocks_per_pass(), 262_144);
    assert_eq!(config.offset(), 0);
}

#[test]
fn zero_chunk_blocks_is_config_error() {
    let err = RegionConfig::from_kib(0, 0, 4096).unwrap_err();
    assert!(err.is_config());
    assert!(!err.is_fatal_abort());
    match err {
        PrngbbError::Config(msg) => assert!(msg.contains("chunk_blocks")),
        e => panic!("Unexpected error type: {e:?}"),
    }
}

#[test]
fn non_divisible_buffer_is_config_error() {
    // 10 KiB = 10240 bytes, chunk = 3 * 16 = 48 bytes
    let err = RegionConfig::from_kib(3, 0, 10).unwrap_err();
    match err {
        PrngbbError::Config(msg) => assert!(msg.contains("multiple")),
        e => panic!("Unexpected error type: {e:?}"),
    }
}

#[test]
fn zero_buffer_is_config_error() {
    assert!(RegionConfig::from_kib(1, 0, 0).unwrap_err().is_config());
    assert!(RegionConfig::new(1, 0, 0).unwrap_err().is_config());
}

#[test]
fn overflowing_sizes_are_config_errors() {
    assert!(RegionConfig::from_kib(1, 0, u64::MAX).unwrap_err().is_config());
    assert!(RegionConfig::new(1, u64::MAX, 16).unwrap_err().is_config());
    assert!(RegionConfig::new(usize::MAX, 0, 16).unwrap_err().is_config());
}

#[test]
fn divisibility_is_exactly_the_acceptance_rule() {
    for chunk_blocks in 1..=40usize {
        for kib in 1..=64u64 {
            let bytes = kib * KIB;
            let divisible = bytes % (chunk_blocks * BLOCK_SIZE) as u64 == 0;
            let result = RegionConfig::from_kib(chunk_blocks, 512, kib);
            assert_eq!(
                result.is_ok(),
                divisible,
                "chunk_blocks={chunk_blocks} kib={kib}"
            );
            if let Ok(config) = result {
                assert_eq!(
                    config.block_count() * config.chunk_size() as u64,
                    config.buffer_size()
                );
            }
        }
    }
}

#[test]
fn byte_sized_regions_need_not_be_whole_kib() {
    let config = RegionConfig::new(1, 7, 48).unwrap();
    assert_eq!(config.block_count(), 3);
    assert_eq!(config.blocks_per_pass(), 3);
}
