use bitflags::bitflags;

use crate::bid::Bid32;

/// Controls rounding and records exceptional conditions for
/// conversions.
///
/// The default context rounds to nearest, ties to even, and has
/// no conditions set.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Ctx {
    rounding: RoundingMode,
    cond: Condition,
}

impl Ctx {
    /// Creates a `Ctx`.
    pub const fn new() -> Self {
        Self {
            rounding: RoundingMode::ToNearestEven,
            cond: Condition::empty(),
        }
    }

    /// Sets the rounding mode.
    pub const fn with_rounding_mode(self, mode: RoundingMode) -> Self {
        let mut ctx = self;
        ctx.rounding = mode;
        ctx
    }

    /// Returns the rounding mode.
    pub const fn rounding_mode(&self) -> RoundingMode {
        self.rounding
    }

    /// Returns the conditions raised so far.
    pub const fn conditions(&self) -> Condition {
        self.cond
    }

    /// Clears the recorded conditions.
    pub fn clear_conditions(&mut self) {
        self.cond = Condition::empty();
    }

    /// Converts `x` to binary32 using the configured rounding
    /// mode, accumulating any raised conditions.
    pub fn to_f32(&mut self, x: Bid32) -> f32 {
        let (bits, cond) = x.to_binary32(self.rounding);
        self.cond = self.cond.union(cond);
        f32::from_bits(bits)
    }
}

/// An IEEE 754-2008 rounding mode.
///
/// The discriminant selects the mode's block in the round
/// boundary table.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub enum RoundingMode {
    /// IEEE 754-2008 roundTiesToEven.
    ///
    /// - Under 0.5 rounds down.
    /// - Over 0.5 rounds up.
    /// - Exactly 0.5 rounds to the nearest even.
    #[default]
    ToNearestEven = 0,
    /// IEEE 754-2008 roundTowardNegative.
    ///
    /// AKA floor.
    ToNegativeInf = 1,
    /// IEEE 754-2008 roundTowardPositive.
    ///
    /// AKA ceiling.
    ToPositiveInf = 2,
    /// IEEE 754-2008 roundTowardZero.
    ///
    /// AKA truncation.
    ToZero = 3,
    /// IEEE 754-2008 roundTiesToAway.
    ///
    /// Like [`ToNearestEven`][Self::ToNearestEven], except that
    /// 0.5 rounds away from zero.
    ToNearestAway = 4,
}

impl RoundingMode {
    /// Returns the mode's base index into the round boundary
    /// table.
    pub(crate) const fn tab_base(self) -> usize {
        (self as usize) << 2
    }
}

/// An exceptional condition raised during a conversion.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub struct Condition(u32);

bitflags! {
    impl Condition: u32 {
        /// Occurs when the result is not exactly the input's
        /// numeric value, including when the
        /// [`OVERFLOW`][Condition::OVERFLOW] or
        /// [`UNDERFLOW`][Condition::UNDERFLOW] conditions occur.
        const INEXACT = 0x1;
        /// Occurs when the rounded result exceeds the largest
        /// finite binary32 value and is replaced with infinity.
        const OVERFLOW = 0x2;
        /// Occurs when the result is both subnormal (or zero)
        /// and inexact.
        const UNDERFLOW = 0x4;
        /// Occurs when an operand is a signaling NaN.
        const INVALID_OPERATION = 0x8;
    }
}
