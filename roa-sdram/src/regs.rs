//! Register layouts of the SDRAM controller.
use arbitrary_int::{u2, u3, u4};

/// Width of the SDRAM data bus.
#[bitbybit::bitenum(u2, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum DqSize {
    _16Bit = 0b00,
    _32Bit = 0b01,
    _64Bit = 0b10,
    _128Bit = 0b11,
}

#[bitbybit::bitenum(u1, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum BankAddressing {
    Linear = 0,
    Interleaved = 1,
}

#[bitbybit::bitenum(u2, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum ColumnCount {
    _8 = 0b00,
    _9 = 0b01,
    _10 = 0b10,
    _11 = 0b11,
}

#[bitbybit::bitenum(u2, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum RowCount {
    _11 = 0b00,
    _12 = 0b01,
    _13 = 0b10,
    _14 = 0b11,
}

#[bitbybit::bitenum(u1, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum BurstSize {
    _4 = 0,
    _8 = 1,
}

/// Access restriction for the controller CSRs.
#[bitbybit::bitenum(u1, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum CsrAccess {
    NormalAndPrivileged = 0,
    PrivilegedOnly = 1,
}

/// Command issued by the controller on the next access to the data region.
///
/// Writing anything but [CommandMode::Normal] arms a one-shot command. The field does not
/// reflect persistent state when read back.
#[bitbybit::bitenum(u2, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum CommandMode {
    Normal = 0b00,
    Precharge = 0b01,
    AutoRefresh = 0b10,
    SetMode = 0b11,
}

#[bitbybit::bitfield(u32, default = 0x0)]
#[derive(Debug, PartialEq, Eq)]
pub struct ControlRegister {
    #[bit(31, rw)]
    enable: bool,
    /// Startup delay of the controller has elapsed. Set by hardware, writes have no effect.
    #[bit(30, rw)]
    init_done: bool,
    #[bits(28..=29, rw)]
    mode: CommandMode,
    #[bit(27, rw)]
    csr_access: CsrAccess,
    #[bit(24, rw)]
    burst_size: BurstSize,
    #[bits(22..=23, rw)]
    rows: RowCount,
    #[bits(20..=21, rw)]
    columns: ColumnCount,
    #[bit(19, rw)]
    bank_addressing: BankAddressing,
    /// Auto-precharge on read and write accesses.
    #[bit(18, rw)]
    auto_precharge: bool,
    #[bits(16..=17, rw)]
    dq_size: DqSize,
    #[bits(0..=3, rw)]
    write_buffer_timeout: u4,
}

/// CAS latency as encoded in the timing configuration register.
#[bitbybit::bitenum(u2, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum CasLatency {
    Reserved = 0b00,
    Cl1 = 0b01,
    Cl2 = 0b10,
    Cl3 = 0b11,
}

/// All counts are in controller clock cycles.
#[bitbybit::bitfield(u32, default = 0x0)]
#[derive(Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// tRDV - Read command to data valid delay.
    #[bits(28..=30, rw)]
    t_rdv: u3,
    /// Add a turnaround cycle between read and write commands.
    #[bit(27, rw)]
    bus_turnaround: bool,
    #[bits(24..=25, rw)]
    cas_latency: CasLatency,
    /// tRRD - Active to active period, different banks.
    #[bits(21..=23, rw)]
    t_rrd: u3,
    /// tWR - Write recovery period.
    #[bits(18..=20, rw)]
    t_wr: u3,
    /// tRP - Precharge period.
    #[bits(15..=17, rw)]
    t_rp: u3,
    /// tRCD - Active to read or write period.
    #[bits(12..=14, rw)]
    t_rcd: u3,
    /// tRAS - Command period, active to precharge.
    #[bits(8..=11, rw)]
    t_ras: u4,
    /// tRC - Active to active period, same bank.
    #[bits(4..=7, rw)]
    t_rc: u4,
    /// tRFC - Refresh to refresh period.
    #[bits(0..=3, rw)]
    t_rfc: u4,
}

#[bitbybit::bitenum(u3, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum BurstLength {
    _1 = 0b000,
    _2 = 0b001,
    _4 = 0b010,
    _8 = 0b011,
    Reserved4 = 0b100,
    Reserved5 = 0b101,
    Reserved6 = 0b110,
    FullPage = 0b111,
}

#[bitbybit::bitenum(u1, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum BurstType {
    Sequential = 0,
    Interleaved = 1,
}

/// CAS latency as encoded in the device mode register. Only 2 and 3 are supported.
#[bitbybit::bitenum(u3, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum ModeLatency {
    Reserved0 = 0b000,
    Reserved1 = 0b001,
    Cl2 = 0b010,
    Cl3 = 0b011,
    Reserved4 = 0b100,
    Reserved5 = 0b101,
    Reserved6 = 0b110,
    Reserved7 = 0b111,
}

#[bitbybit::bitenum(u1, exhaustive = true)]
#[derive(Debug, PartialEq, Eq)]
pub enum WriteBurstMode {
    ProgrammedBurstLength = 0,
    SingleLocation = 1,
}

/// Standard operating mode. All other operating mode codes are reserved.
pub const OPERATING_MODE_STANDARD: u2 = u2::new(0b00);

/// JEDEC SDRAM mode register.
///
/// This value is never written to the controller directly. It is placed on the address lines
/// of a data region read while the controller is in [CommandMode::SetMode].
#[bitbybit::bitfield(u16, default = 0x0)]
#[derive(Debug, PartialEq, Eq)]
pub struct ModeRegister {
    #[bit(9, rw)]
    write_burst_mode: WriteBurstMode,
    #[bits(7..=8, rw)]
    operating_mode: u2,
    #[bits(4..=6, rw)]
    latency: ModeLatency,
    #[bit(3, rw)]
    burst_type: BurstType,
    #[bits(0..=2, rw)]
    burst_length: BurstLength,
}
