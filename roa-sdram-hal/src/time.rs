//! # Time units

/// Hertz
pub type Hertz = fugit::HertzU32;
pub type Hz = Hertz;

/// MegaHertz
pub type MegaHertz = fugit::MegahertzU32;
pub type MHz = MegaHertz;

/// Microseconds
pub type Microseconds = fugit::MicrosDurationU32;

/// Nanoseconds
pub type Nanoseconds = fugit::NanosDurationU32;

/// Convert a datasheet duration into a count of controller clock cycles, rounded up.
///
/// Saturates at [u32::MAX]. The result still has to fit the width of the targeted
/// [roa_sdram::regs::TimingConfig] field.
pub const fn clock_cycles(duration: Nanoseconds, clk: Hertz) -> u32 {
    let cycles = (duration.ticks() as u64 * clk.raw() as u64).div_ceil(1_000_000_000);
    if cycles > u32::MAX as u64 {
        return u32::MAX;
    }
    cycles as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use fugit::{ExtU32, RateExtU32};

    #[test]
    fn exact_multiple() {
        assert_eq!(clock_cycles(60.nanos(), 100.MHz()), 6);
    }

    #[test]
    fn rounds_up() {
        assert_eq!(clock_cycles(15.nanos(), 100.MHz()), 2);
        assert_eq!(clock_cycles(20.nanos(), 133.MHz()), 3);
    }

    #[test]
    fn refresh_interval() {
        // 64 ms / 8192 rows at 50 MHz.
        assert_eq!(clock_cycles(7812.nanos(), 50.MHz()), 391);
    }

    #[test]
    fn saturates_on_overflow() {
        // 4 s at 4 GHz are 16e9 cycles.
        assert_eq!(clock_cycles(4_000_000_000.nanos(), 4_000_000_000.Hz()), u32::MAX);
        assert_eq!(clock_cycles(1_000_000_000.nanos(), 4_000_000_000.Hz()), 4_000_000_000);
    }

    #[test]
    fn zero_duration() {
        assert_eq!(clock_cycles(0.nanos(), 100.MHz()), 0);
    }
}
