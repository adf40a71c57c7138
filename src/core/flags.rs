//! Line header options
//!
//! [`Flags`] selects which annotations are written in front of every log line:
//! date, time of day (optionally with microseconds), and the caller's source
//! location.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// Local date: `2009/01/23`
    pub const DATE: Flags = Flags(1 << 0);
    /// Local time of day: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies [`Flags::TIME`].
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full source path and line: `src/server/main.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// File name and line only: `main.rs:23`. Overrides [`Flags::LONG_FILE`].
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone
    pub const UTC: Flags = Flags(1 << 5);

    /// Date and time of day
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);
    /// What [`Logger::new`](crate::Logger::new) configures
    pub const DEFAULT: Flags = Flags(Self::DATE.0 | Self::MICROSECONDS.0 | Self::SHORT_FILE.0);

    const ALL_BITS: u32 = (1 << 6) - 1;

    #[must_use]
    pub const fn empty() -> Self {
        Flags(0)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build from raw bits, dropping unknown ones
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Flags(bits & Self::ALL_BITS)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set
    #[must_use]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when any bit of `other` is set
    #[must_use]
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Flags) {
        self.0 &= !other.0;
    }

    pub(crate) fn has_timestamp(self) -> bool {
        self.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS)
    }

    pub(crate) fn has_location(self) -> bool {
        self.intersects(Flags::LONG_FILE | Flags::SHORT_FILE)
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl Not for Flags {
    type Output = Flags;

    fn not(self) -> Flags {
        Flags(!self.0 & Self::ALL_BITS)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 6] = [
            (Flags::DATE, "DATE"),
            (Flags::TIME, "TIME"),
            (Flags::MICROSECONDS, "MICROSECONDS"),
            (Flags::LONG_FILE, "LONG_FILE"),
            (Flags::SHORT_FILE, "SHORT_FILE"),
            (Flags::UTC, "UTC"),
        ];

        if self.is_empty() {
            return write!(f, "Flags(empty)");
        }

        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "Flags({})", names.join(" | "))
    }
}
