//! The ADE7953 register map.
//!
//! Registers come in four widths. The 24-bit measurement and calibration
//! registers at `0x2xx` are mirrored as 32-bit registers at `0x3xx`; reading
//! the mirror returns the same quantity sign extended (or zero padded) to the
//! wider container. The full published map is carried, not just the registers
//! the typed accessors use.

/// 8-bit registers. The discriminant is the 16-bit bus address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Register8 {
    /// SAGCYC, R/W, default 0x00, unsigned. Sag line cycles.
    SagCyc = 0x000,
    /// DISNOLOAD, R/W, default 0x00, unsigned. No-load detection disable.
    DisNoLoad = 0x001,
    /// LCYCMODE, R/W, default 0x40, unsigned. Line cycle accumulation mode
    /// configuration.
    LcycMode = 0x004,
    /// PGA_V, R/W, default 0x00, unsigned. Voltage channel gain (bits 2:0).
    PgaV = 0x007,
    /// PGA_IA, R/W, default 0x00, unsigned. Current Channel A gain (bits 2:0).
    PgaIa = 0x008,
    /// PGA_IB, R/W, default 0x00, unsigned. Current Channel B gain (bits 2:0).
    PgaIb = 0x009,
    /// WRITE_PROTECT, R/W, default 0x00, unsigned. Write protection (bits 2:0).
    WriteProtect = 0x040,
    /// LAST_OP, R/W, default 0x00, unsigned. Type of the last successful
    /// communication: 0x35 = read, 0xCA = write.
    LastOp = 0x0FD,
    /// LAST_RWDATA, R/W, default 0x00, unsigned. Data from the last successful
    /// 8-bit register communication.
    LastRwData8 = 0x0FF,
    /// Version, R/W, unsigned. Silicon version number.
    Version = 0x702,
    /// EX_REF, R/W, default 0x00, unsigned. Reference input configuration:
    /// 0 = internal, 1 = external.
    ExRef = 0x800,
}

/// 16-bit registers. The discriminant is the 16-bit bus address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Register16 {
    /// ZXTOUT, R/W, default 0xFFFF, unsigned. Zero-crossing timeout.
    ZxTout = 0x100,
    /// LINECYC, R/W, default 0x0000, unsigned. Number of half line cycles for
    /// line cycle energy accumulation mode.
    LineCyc = 0x101,
    /// CONFIG, R/W, default 0x8004, unsigned. Configuration register;
    /// COMM_LOCK is bit 15.
    Config = 0x102,
    /// CF1DEN, R/W, default 0x003F, unsigned. CF1 frequency divider
    /// denominator. Write twice in sequence to take effect.
    Cf1Den = 0x103,
    /// CF2DEN, R/W, default 0x003F, unsigned. CF2 frequency divider
    /// denominator. Write twice in sequence to take effect.
    Cf2Den = 0x104,
    /// CFMODE, R/W, default 0x0300, unsigned. CF output selection.
    CfMode = 0x107,
    /// PHCALA, R/W, default 0x0000, signed. Phase calibration (Current
    /// Channel A), sign magnitude format.
    PhCalA = 0x108,
    /// PHCALB, R/W, default 0x0000, signed. Phase calibration (Current
    /// Channel B), sign magnitude format.
    PhCalB = 0x109,
    /// PFA, R, default 0x0000, signed. Power factor (Current Channel A).
    PfA = 0x10A,
    /// PFB, R, default 0x0000, signed. Power factor (Current Channel B).
    PfB = 0x10B,
    /// ANGLE_A, R, default 0x0000, signed. Angle between the voltage input
    /// and the Current Channel A input.
    AngleA = 0x10C,
    /// ANGLE_B, R, default 0x0000, signed. Angle between the voltage input
    /// and the Current Channel B input.
    AngleB = 0x10D,
    /// ALT_OUTPUT, R/W, default 0x0000, unsigned. Alternative output
    /// functions.
    AltOutput = 0x110,
    /// Period, R, default 0x0000, unsigned. Period register.
    Period = 0x11E,
    /// Reserved, R/W, default 0x0000, unsigned. Must be set to 0x0030 to meet
    /// datasheet performance; unlock by writing 0xAD to address 0xFE
    /// immediately prior.
    Reserved = 0x120,
    /// LAST_ADD, R, default 0x0000, unsigned. Address of the last successful
    /// communication.
    LastAdd = 0x1FE,
    /// LAST_RWDATA, R, default 0x0000, unsigned. Data from the last
    /// successful 16-bit register communication.
    LastRwData16 = 0x1FF,
}

/// 24-bit registers. The discriminant is the 16-bit bus address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Register24 {
    /// SAGLVL, R/W, default 0x000000, unsigned. Sag voltage level.
    SagLvl = 0x200,
    /// ACCMODE, R/W, default 0x000000, unsigned. Accumulation mode.
    AccMode = 0x201,
    /// AP_NOLOAD, R/W, default 0x00E419, unsigned. Active power no-load level.
    ApNoload = 0x203,
    /// VAR_NOLOAD, R/W, default 0x000000, unsigned. Reactive power no-load
    /// level.
    VarNoload = 0x204,
    /// VA_NOLOAD, R/W, default 0x000000, unsigned. Apparent power no-load
    /// level.
    VaNoload = 0x205,
    /// AVA, R, default 0x000000, signed. Instantaneous apparent power
    /// (Current Channel A).
    Ava = 0x210,
    /// BVA, R, default 0x000000, signed. Instantaneous apparent power
    /// (Current Channel B).
    Bva = 0x211,
    /// AWATT, R, default 0x000000, signed. Instantaneous active power
    /// (Current Channel A).
    Awatt = 0x212,
    /// BWATT, R, default 0x000000, signed. Instantaneous active power
    /// (Current Channel B).
    Bwatt = 0x213,
    /// AVAR, R, default 0x000000, signed. Instantaneous reactive power
    /// (Current Channel A).
    Avar = 0x214,
    /// BVAR, R, default 0x000000, signed. Instantaneous reactive power
    /// (Current Channel B).
    Bvar = 0x215,
    /// IA, R, default 0x000000, signed. Instantaneous current (Current
    /// Channel A).
    Ia = 0x216,
    /// IB, R, default 0x000000, signed. Instantaneous current (Current
    /// Channel B).
    Ib = 0x217,
    /// V, R, default 0x000000, signed. Instantaneous voltage (voltage
    /// channel).
    V = 0x218,
    /// IRMSA, R, default 0x000000, unsigned. IRMS (Current Channel A).
    IrmsA = 0x21A,
    /// IRMSB, R, default 0x000000, unsigned. IRMS (Current Channel B).
    IrmsB = 0x21B,
    /// VRMS, R, default 0x000000, unsigned. VRMS register.
    Vrms = 0x21C,
    /// AENERGYA, R, default 0x000000, signed. Active energy (Current
    /// Channel A).
    AEnergyA = 0x21E,
    /// AENERGYB, R, default 0x000000, signed. Active energy (Current
    /// Channel B).
    AEnergyB = 0x21F,
    /// RENERGYA, R, default 0x000000, signed. Reactive energy (Current
    /// Channel A).
    REnergyA = 0x220,
    /// RENERGYB, R, default 0x000000, signed. Reactive energy (Current
    /// Channel B).
    REnergyB = 0x221,
    /// APENERGYA, R, default 0x000000, signed. Apparent energy (Current
    /// Channel A).
    ApEnergyA = 0x222,
    /// APENERGYB, R, default 0x000000, signed. Apparent energy (Current
    /// Channel B).
    ApEnergyB = 0x223,
    /// OVLVL, R/W, default 0xFFFFFF, unsigned. Overvoltage level.
    OvLvl = 0x224,
    /// OILVL, R/W, default 0xFFFFFF, unsigned. Overcurrent level.
    OiLvl = 0x225,
    /// VPEAK, R, default 0x000000, unsigned. Voltage channel peak.
    VPeak = 0x226,
    /// RSTVPEAK, R, default 0x000000, unsigned. Read voltage peak with reset.
    RstVPeak = 0x227,
    /// IAPEAK, R, default 0x000000, unsigned. Current Channel A peak.
    IaPeak = 0x228,
    /// RSTIAPEAK, R, default 0x000000, unsigned. Read Current Channel A peak
    /// with reset.
    RstIaPeak = 0x229,
    /// IBPEAK, R, default 0x000000, unsigned. Current Channel B peak.
    IbPeak = 0x22A,
    /// RSTIBPEAK, R, default 0x000000, unsigned. Read Current Channel B peak
    /// with reset.
    RstIbPeak = 0x22B,
    /// IRQENA, R/W, default 0x100000, unsigned. Interrupt enable (Current
    /// Channel A).
    IrqEnA = 0x22C,
    /// IRQSTATA, R, default 0x000000, unsigned. Interrupt status (Current
    /// Channel A).
    IrqStatA = 0x22D,
    /// RSTIRQSTATA, R, default 0x000000, unsigned. Reset interrupt status
    /// (Current Channel A).
    RstIrqStatA = 0x22E,
    /// IRQENB, R/W, default 0x000000, unsigned. Interrupt enable (Current
    /// Channel B).
    IrqEnB = 0x22F,
    /// IRQSTATB, R, default 0x000000, unsigned. Interrupt status (Current
    /// Channel B).
    IrqStatB = 0x230,
    /// RSTIRQSTATB, R, default 0x000000, unsigned. Reset interrupt status
    /// (Current Channel B).
    RstIrqStatB = 0x231,
    /// AIGAIN, R/W, default 0x400000, unsigned. Current channel gain (Current
    /// Channel A).
    AiGain = 0x280,
    /// AVGAIN, R/W, default 0x400000, unsigned. Voltage channel gain.
    AvGain = 0x281,
    /// AWGAIN, R/W, default 0x400000, unsigned. Active power gain (Current
    /// Channel A).
    AwGain = 0x282,
    /// AVARGAIN, R/W, default 0x400000, unsigned. Reactive power gain
    /// (Current Channel A).
    AvarGain = 0x283,
    /// AVAGAIN, R/W, default 0x400000, unsigned. Apparent power gain (Current
    /// Channel A).
    AvaGain = 0x284,
    /// Reserved, R/W, default 0x000000, signed. Do not modify.
    Reserved = 0x285,
    /// AIRMSOS, R/W, default 0x000000, signed. IRMS offset (Current
    /// Channel A).
    AIrmsOs = 0x286,
    /// Reserved, R/W, default 0x000000, signed. Do not modify.
    Reserved1 = 0x287,
    /// VRMSOS, R/W, default 0x000000, signed. VRMS offset.
    VrmsOs = 0x288,
    /// AWATTOS, R/W, default 0x000000, signed. Active power offset correction
    /// (Current Channel A).
    AWattOs = 0x289,
    /// AVAROS, R/W, default 0x000000, signed. Reactive power offset
    /// correction (Current Channel A).
    AVarOs = 0x28A,
    /// AVAOS, R/W, default 0x000000, signed. Apparent power offset correction
    /// (Current Channel A).
    AVaOs = 0x28B,
    /// BIGAIN, R/W, default 0x400000, unsigned. Current channel gain (Current
    /// Channel B).
    BiGain = 0x28C,
    /// BVGAIN, R/W, default 0x400000, unsigned. Do not modify.
    BvGain = 0x28D,
    /// BWGAIN, R/W, default 0x400000, unsigned. Active power gain (Current
    /// Channel B).
    BwGain = 0x28E,
    /// BVARGAIN, R/W, default 0x400000, unsigned. Reactive power gain
    /// (Current Channel B).
    BvarGain = 0x28F,
    /// BVAGAIN, R/W, default 0x400000, unsigned. Apparent power gain (Current
    /// Channel B).
    BvaGain = 0x290,
    /// Reserved, R/W, default 0x000000, signed. Do not modify.
    Reserved2 = 0x291,
    /// BIRMSOS, R/W, default 0x000000, unsigned. IRMS offset (Current
    /// Channel B).
    BIrmsOs = 0x292,
    /// Reserved, R/W, default 0x000000, signed. Do not modify.
    Reserved3 = 0x293,
    /// Reserved, R/W, default 0x000000, signed. Do not modify.
    Reserved4 = 0x294,
    /// BWATTOS, R/W, default 0x000000, unsigned. Active power offset
    /// correction (Current Channel B).
    BWattOs = 0x295,
    /// BVAROS, R/W, default 0x000000, unsigned. Reactive power offset
    /// correction (Current Channel B).
    BVarOs = 0x296,
    /// BVAOS, R/W, default 0x000000, unsigned. Apparent power offset
    /// correction (Current Channel B).
    BVaOs = 0x297,
    /// LAST_RWDATA, R, default 0x000000, unsigned. Data from the last
    /// successful 24-bit/32-bit register communication.
    LastRwData24 = 0x2FF,
}

/// 32-bit registers. The discriminant is the 16-bit bus address.
///
/// Most entries mirror a 24-bit register at the same offset in the `0x2xx`
/// page; some carry 24 bits of payload with a padding byte, others are sign
/// magnitude. That interpretation is per register, applied by the accessor
/// that reads it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Register32 {
    /// SAGLVL, R/W, default 0x000000, unsigned. Sag voltage level.
    SagLvl = 0x300,
    /// ACCMODE, R/W, default 0x000000, unsigned. Accumulation mode.
    AccMode = 0x301,
    /// AP_NOLOAD, R/W, default 0x00E419, unsigned. Active power no-load level.
    ApNoload = 0x303,
    /// VAR_NOLOAD, R/W, default 0x000000, unsigned. Reactive power no-load
    /// level.
    VarNoload = 0x304,
    /// VA_NOLOAD, R/W, default 0x000000, unsigned. Apparent power no-load
    /// level.
    VaNoload = 0x305,
    /// AVA, R, default 0x000000, signed. Instantaneous apparent power
    /// (Current Channel A).
    Ava = 0x310,
    /// BVA, R, default 0x000000, signed. Instantaneous apparent power
    /// (Current Channel B).
    Bva = 0x311,
    /// AWATT, R, default 0x000000, signed. Instantaneous active power
    /// (Current Channel A).
    Awatt = 0x312,
    /// BWATT, R, default 0x000000, signed. Instantaneous active power
    /// (Current Channel B).
    Bwatt = 0x313,
    /// AVAR, R, default 0x000000, signed. Instantaneous reactive power
    /// (Current Channel A).
    Avar = 0x314,
    /// BVAR, R, default 0x000000, signed. Instantaneous reactive power
    /// (Current Channel B).
    Bvar = 0x315,
    /// IA, R, default 0x000000, signed. Instantaneous current (Current
    /// Channel A).
    Ia = 0x316,
    /// IB, R, default 0x000000, signed. Instantaneous current (Current
    /// Channel B).
    Ib = 0x317,
    /// V, R, default 0x000000, signed. Instantaneous voltage (voltage
    /// channel).
    V = 0x318,
    /// IRMSA, R, default 0x000000, unsigned. IRMS (Current Channel A).
    IrmsA = 0x31A,
    /// IRMSB, R, default 0x000000, unsigned. IRMS (Current Channel B).
    IrmsB = 0x31B,
    /// VRMS, R, default 0x000000, unsigned. VRMS register.
    Vrms = 0x31C,
    /// AENERGYA, R, default 0x000000, signed. Active energy (Current
    /// Channel A).
    AEnergyA = 0x31E,
    /// AENERGYB, R, default 0x000000, signed. Active energy (Current
    /// Channel B).
    AEnergyB = 0x31F,
    /// RENERGYA, R, default 0x000000, signed. Reactive energy (Current
    /// Channel A).
    REnergyA = 0x320,
    /// RENERGYB, R, default 0x000000, signed. Reactive energy (Current
    /// Channel B).
    REnergyB = 0x321,
    /// APENERGYA, R, default 0x000000, signed. Apparent energy (Current
    /// Channel A).
    ApEnergyA = 0x322,
    /// APENERGYB, R, default 0x000000, signed. Apparent energy (Current
    /// Channel B).
    ApEnergyB = 0x323,
    /// OVLVL, R/W, default 0xFFFFFF, unsigned. Overvoltage level.
    OvLvl = 0x324,
    /// OILVL, R/W, default 0xFFFFFF, unsigned. Overcurrent level.
    OiLvl = 0x325,
    /// VPEAK, R, default 0x000000, unsigned. Voltage channel peak.
    VPeak = 0x326,
    /// RSTVPEAK, R, default 0x000000, unsigned. Read voltage peak with reset.
    RstVPeak = 0x327,
    /// IAPEAK, R, default 0x000000, unsigned. Current Channel A peak.
    IaPeak = 0x328,
    /// RSTIAPEAK, R, default 0x000000, unsigned. Read Current Channel A peak
    /// with reset.
    RstIaPeak = 0x329,
    /// IBPEAK, R, default 0x000000, unsigned. Current Channel B peak.
    IbPeak = 0x32A,
    /// RSTIBPEAK, R, default 0x000000, unsigned. Read Current Channel B peak
    /// with reset.
    RstIbPeak = 0x32B,
    /// IRQENA, R/W, default 0x100000, unsigned. Interrupt enable (Current
    /// Channel A).
    IrqEnA = 0x32C,
    /// IRQSTATA, R, default 0x000000, unsigned. Interrupt status (Current
    /// Channel A).
    IrqStatA = 0x32D,
    /// RSTIRQSTATA, R, default 0x000000, unsigned. Reset interrupt status
    /// (Current Channel A).
    RstIrqStatA = 0x32E,
    /// IRQENB, R/W, default 0x000000, unsigned. Interrupt enable (Current
    /// Channel B).
    IrqEnB = 0x32F,
    /// IRQSTATB, R, default 0x000000, unsigned. Interrupt status (Current
    /// Channel B).
    IrqStatB = 0x330,
    /// RSTIRQSTATB, R, default 0x000000, unsigned. Reset interrupt status
    /// (Current Channel B).
    RstIrqStatB = 0x331,
    /// CRC, R, default 0xFFFFFF, unsigned. Checksum.
    Crc = 0x37F,
    /// AIGAIN, R/W, default 0x400000, unsigned. Current channel gain (Current
    /// Channel A).
    AiGain = 0x380,
    /// AVGAIN, R/W, default 0x400000, unsigned. Voltage channel gain.
    AvGain = 0x381,
    /// AWGAIN, R/W, default 0x400000, unsigned. Active power gain (Current
    /// Channel A).
    AwGain = 0x382,
    /// AVARGAIN, R/W, default 0x400000, unsigned. Reactive power gain
    /// (Current Channel A).
    AvarGain = 0x383,
    /// AVAGAIN, R/W, default 0x400000, unsigned. Apparent power gain (Current
    /// Channel A).
    AvaGain = 0x384,
    /// Reserved, R/W, default 0x000000, signed. Do not modify.
    Reserved = 0x385,
    /// AIRMSOS, R/W, default 0x000000, signed. IRMS offset (Current
    /// Channel A).
    AIrmsOs = 0x386,
    /// Reserved, R/W, default 0x000000, signed. Do not modify.
    Reserved1 = 0x387,
    /// VRMSOS, R/W, default 0x000000, signed. VRMS offset.
    VrmsOs = 0x388,
    /// AWATTOS, R/W, default 0x000000, signed. Active power offset correction
    /// (Current Channel A).
    AWattOs = 0x389,
    /// AVAROS, R/W, default 0x000000, signed. Reactive power offset
    /// correction (Current Channel A).
    AVarOs = 0x38A,
    /// AVAOS, R/W, default 0x000000, signed. Apparent power offset correction
    /// (Current Channel A).
    AVaOs = 0x38B,
    /// BIGAIN, R/W, default 0x400000, unsigned. Current channel gain (Current
    /// Channel B).
    BiGain = 0x38C,
    /// BVGAIN, R/W, default 0x400000, unsigned. Do not modify.
    BvGain = 0x38D,
    /// BWGAIN, R/W, default 0x400000, unsigned. Active power gain (Current
    /// Channel B).
    BwGain = 0x38E,
    /// BVARGAIN, R/W, default 0x400000, unsigned. Reactive power gain
    /// (Current Channel B).
    BvarGain = 0x38F,
    /// BVAGAIN, R/W, default 0x400000, unsigned. Apparent power gain (Current
    /// Channel B).
    BvaGain = 0x390,
    /// Reserved, R/W, default 0x000000, signed. Do not modify.
    Reserved2 = 0x391,
    /// BIRMSOS, R/W, default 0x000000, unsigned. IRMS offset (Current
    /// Channel B).
    BIrmsOs = 0x392,
    /// Reserved, R/W, default 0x000000, signed. Do not modify.
    Reserved3 = 0x393,
    /// Reserved, R/W, default 0x000000, signed. Do not modify.
    Reserved4 = 0x394,
    /// BWATTOS, R/W, default 0x000000, unsigned. Active power offset
    /// correction (Current Channel B).
    BWattOs = 0x395,
    /// BVAROS, R/W, default 0x000000, unsigned. Reactive power offset
    /// correction (Current Channel B).
    BVarOs = 0x396,
    /// BVAOS, R/W, default 0x000000, unsigned. Apparent power offset
    /// correction (Current Channel B).
    BVaOs = 0x397,
    /// LAST_RWDATA, R, default 0x000000, unsigned. Data from the last
    /// successful 24-bit/32-bit register communication.
    LastRwData32 = 0x3FF,
}
