//! Access seams for the controller CSRs and the SDRAM data region.
//!
//! The bring-up sequence only talks to the hardware through [SdramRegisters] and [DataWindow].
//! The MMIO implementations perform volatile accesses, so no access is cached, merged or
//! elided by the compiler.
use core::ptr::NonNull;

use roa_sdram::{
    MmioSdramController,
    regs::{ControlRegister, TimingConfig},
};

/// Controller register block.
pub trait SdramRegisters {
    fn control(&mut self) -> ControlRegister;
    fn set_control(&mut self, value: ControlRegister);
    fn set_time_config(&mut self, value: TimingConfig);
    fn set_time_ref(&mut self, value: u16);
}

impl SdramRegisters for MmioSdramController<'_> {
    #[inline]
    fn control(&mut self) -> ControlRegister {
        self.read_control()
    }

    #[inline]
    fn set_control(&mut self, value: ControlRegister) {
        self.write_control(value);
    }

    #[inline]
    fn set_time_config(&mut self, value: TimingConfig) {
        self.write_time_config(value);
    }

    #[inline]
    fn set_time_ref(&mut self, value: u16) {
        self.write_time_ref(value);
    }
}

/// SDRAM data region as seen through the controller.
///
/// Offsets are counted in 32-bit words from the base of the region. Depending on the command
/// mode armed in the control register, a read is translated into an SDRAM command instead of
/// a data transfer.
pub trait DataWindow {
    fn read_word(&mut self, word_offset: usize) -> u32;
    fn write_word(&mut self, word_offset: usize, value: u32);
}

/// Volatile [DataWindow] over the memory-mapped SDRAM data region.
pub struct MmioDataWindow {
    base: NonNull<u32>,
}

// Safety: The window only holds the base address of the data region. Exclusive access to the
// region is required by the constructor contract, independent of the owning thread.
unsafe impl Send for MmioDataWindow {}

impl MmioDataWindow {
    /// Create a data window at the given base address.
    ///
    /// Returns [None] if the address is null or not aligned to 4 bytes.
    ///
    /// # Safety
    ///
    /// The address must be the base of the data region of an SDRAM controller, and every word
    /// offset used later must stay inside that region. The caller must ensure no other code
    /// accesses the data region while the controller is being initialized.
    pub unsafe fn new_at(base_addr: usize) -> Option<Self> {
        if !base_addr.is_multiple_of(4) {
            return None;
        }
        NonNull::new(base_addr as *mut u32).map(|base| Self { base })
    }

    #[inline]
    pub fn base_addr(&self) -> usize {
        self.base.as_ptr() as usize
    }
}

impl DataWindow for MmioDataWindow {
    #[inline]
    fn read_word(&mut self, word_offset: usize) -> u32 {
        // Safety: Validity of the region is guaranteed by the constructor contract.
        unsafe { core::ptr::read_volatile(self.base.as_ptr().add(word_offset)) }
    }

    #[inline]
    fn write_word(&mut self, word_offset: usize, value: u32) {
        // Safety: Validity of the region is guaranteed by the constructor contract.
        unsafe { core::ptr::write_volatile(self.base.as_ptr().add(word_offset), value) }
    }
}
