//! Memory tests to verify the SDRAM after it was initialized.
//!
//! All tests overwrite the tested words.
use crate::access::DataWindow;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MemTestError {
    #[error("memory test error at word offset {offset:#x}: expected {expected:#010x}, found {found:#010x}")]
    Memory {
        offset: usize,
        expected: u32,
        found: u32,
    },
}

/// Walk a single cleared bit through all 32 bit positions for the first `words` words.
pub fn walking_zero_test<D: DataWindow>(data: &mut D, words: usize) -> Result<(), MemTestError> {
    walking_value_test(data, true, words)
}

/// Walk a single set bit through all 32 bit positions for the first `words` words.
pub fn walking_one_test<D: DataWindow>(data: &mut D, words: usize) -> Result<(), MemTestError> {
    walking_value_test(data, false, words)
}

pub fn walking_value_test<D: DataWindow>(
    data: &mut D,
    walking_zero: bool,
    words: usize,
) -> Result<(), MemTestError> {
    for bit in 0..32 {
        let pattern = if walking_zero {
            !(1u32 << bit)
        } else {
            1u32 << bit
        };

        for offset in 0..words {
            data.write_word(offset, pattern);
        }
        for offset in 0..words {
            check(data, offset, pattern)?;
        }
    }
    Ok(())
}

/// Alternating 0xAAAAAAAA and 0x55555555 pattern, then the inverted pattern.
pub fn checkerboard_test<D: DataWindow>(data: &mut D, words: usize) -> Result<(), MemTestError> {
    for pattern in [0xAAAA_AAAAu32, 0x5555_5555u32] {
        for offset in 0..words {
            data.write_word(offset, checkerboard(pattern, offset));
        }
        for offset in 0..words {
            check(data, offset, checkerboard(pattern, offset))?;
        }
    }
    Ok(())
}

#[inline]
const fn checkerboard(pattern: u32, offset: usize) -> u32 {
    if offset % 2 == 0 { pattern } else { !pattern }
}

#[inline]
fn check<D: DataWindow>(data: &mut D, offset: usize, expected: u32) -> Result<(), MemTestError> {
    let found = data.read_word(offset);
    if found != expected {
        log::warn!(
            "SDRAM memory test failed at word offset {:#x}: {:#010x} != {:#010x}",
            offset,
            found,
            expected
        );
        return Err(MemTestError::Memory {
            offset,
            expected,
            found,
        });
    }
    Ok(())
}
