use core::any::Any;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::info::Type;

// The engine owns the three fixed interpretations (float = POSIX
// timestamp, int = ordinal day count, text = ISO-8601) and produces a
// chrono naive value; the `make` pointer boxes whatever representation
// the concrete target prefers.

// -----------------------------------------------------------------------------
// DateTimeInfo

/// A container for compile-time date-time info.
#[derive(Clone, Debug)]
pub struct DateTimeInfo {
    ty: Type,
    make: fn(NaiveDateTime) -> Box<dyn Any>,
}

impl DateTimeInfo {
    /// Creates a new [`DateTimeInfo`] with the target's wrapping function.
    pub fn new<T: Any>(make: fn(NaiveDateTime) -> Box<dyn Any>) -> Self {
        Self {
            ty: Type::of::<T>(),
            make,
        }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Boxes the parsed date-time as the concrete target.
    #[inline]
    pub fn make(&self, value: NaiveDateTime) -> Box<dyn Any> {
        (self.make)(value)
    }
}

// -----------------------------------------------------------------------------
// DateInfo

/// A container for compile-time date info.
#[derive(Clone, Debug)]
pub struct DateInfo {
    ty: Type,
    make: fn(NaiveDate) -> Box<dyn Any>,
}

impl DateInfo {
    /// Creates a new [`DateInfo`] with the target's wrapping function.
    pub fn new<T: Any>(make: fn(NaiveDate) -> Box<dyn Any>) -> Self {
        Self {
            ty: Type::of::<T>(),
            make,
        }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Boxes the parsed date as the concrete target.
    #[inline]
    pub fn make(&self, value: NaiveDate) -> Box<dyn Any> {
        (self.make)(value)
    }
}

// -----------------------------------------------------------------------------
// TimeInfo

/// A container for compile-time time-of-day info.
#[derive(Clone, Debug)]
pub struct TimeInfo {
    ty: Type,
    make: fn(NaiveTime) -> Box<dyn Any>,
}

impl TimeInfo {
    /// Creates a new [`TimeInfo`] with the target's wrapping function.
    pub fn new<T: Any>(make: fn(NaiveTime) -> Box<dyn Any>) -> Self {
        Self {
            ty: Type::of::<T>(),
            make,
        }
    }

    /// Returns the [`Type`] identity.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Boxes the parsed time as the concrete target.
    #[inline]
    pub fn make(&self, value: NaiveTime) -> Box<dyn Any> {
        (self.make)(value)
    }
}
