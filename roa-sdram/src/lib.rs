//! # Peripheral access API for the Roa Logic SDRAM controller
//!
//! This crate provides the bit-exact register layouts of the Roa Logic AHB-Lite SDRAM controller
//! and a memory-mapped register block built with [derive_mmio].
//!
//! The base addresses of the controller CSRs and of the SDRAM data region depend on the
//! system integration, so no fixed-address constructors are provided.
#![no_std]

pub mod regs;

use regs::{ControlRegister, TimingConfig};

/// SDRAM controller register block.
#[derive(derive_mmio::Mmio)]
#[repr(C)]
pub struct SdramController {
    /// Control register
    control: ControlRegister,
    /// Timing configuration register
    time_config: TimingConfig,
    /// Refresh interval in controller clock cycles
    time_ref: u16,
    _reserved: u16,
}

static_assertions::const_assert_eq!(core::mem::size_of::<SdramController>(), 0x0C);
static_assertions::const_assert_eq!(core::mem::offset_of!(SdramController, time_config), 0x04);
static_assertions::const_assert_eq!(core::mem::offset_of!(SdramController, time_ref), 0x08);
static_assertions::const_assert_eq!(core::mem::offset_of!(SdramController, _reserved), 0x0A);
