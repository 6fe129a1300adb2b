//! The spinning wheel.
//!
//! The pointer is fixed at the top of the wheel and the wheel turns clockwise
//! underneath it. Segment `i` covers the wheel-frame arc
//! `[i * seg, (i + 1) * seg)`, measured clockwise from the pointer's rest
//! position, where `seg = 360 / n`.

use std::{fmt, hash::Hash, ops::RangeInclusive, time::Duration};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::random::RandomSource;

mod resolve;
pub use resolve::{landed_index, resolve, segment_angle, SpinResult};

pub const DEFAULT_ROTATIONS: RangeInclusive<u32> = 3..=6;
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(4000);

/// Classic wheel values; 0 is the bankrupt wedge.
pub const DEFAULT_VALUES: [u32; 12] = [100, 200, 300, 400, 500, 600, 800, 1000, 0, 250, 350, 750];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("a wheel needs at least one segment")]
    NoSegments,

    #[error("rotation range {}..={} is empty", .0.start(), .0.end())]
    EmptyRotations(RangeInclusive<u32>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Wedge {
    Points(u32),
    Bankrupt,
}

impl Wedge {
    pub const fn from_value(value: u32) -> Self {
        match value {
            0 => Self::Bankrupt,
            value => Self::Points(value),
        }
    }
}

impl fmt::Display for Wedge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points(value) => write!(f, "${value}"),
            Self::Bankrupt => write!(f, "BANKRUPT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<T> {
    pub id: T,
    pub label: String,
}

impl<T> Segment<T> {
    pub fn new(id: T, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// A wheel of segments plus its cumulative rotation.
///
/// Between [`spin`](Self::spin) and [`settle`](Self::settle) the wheel is
/// busy and refuses to spin again.
#[derive(Debug, Clone)]
pub struct Wheel<T> {
    segments: Vec<Segment<T>>,
    rotation: f64,
    rotations: RangeInclusive<u32>,
    settle_delay: Duration,
    busy: bool,
}

impl<T> Wheel<T>
where
    T: Clone + Eq + Hash,
{
    pub fn new(segments: Vec<Segment<T>>) -> Result<Self, Error> {
        if segments.is_empty() {
            return Err(Error::NoSegments);
        }

        Ok(Self {
            segments,
            rotation: 0.0,
            rotations: DEFAULT_ROTATIONS,
            settle_delay: DEFAULT_SETTLE_DELAY,
            busy: false,
        })
    }

    pub fn with_rotations(mut self, rotations: RangeInclusive<u32>) -> Result<Self, Error> {
        if rotations.is_empty() {
            return Err(Error::EmptyRotations(rotations));
        }

        self.rotations = rotations;
        Ok(self)
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    pub const fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn segment(&self, index: usize) -> Option<&Segment<T>> {
        self.segments.get(index)
    }

    /// Resolves a spin immediately. The result should only be delivered
    /// (via [`settle`](Self::settle)) once the settle delay has passed.
    pub fn spin(&mut self, rng: &mut impl RandomSource) -> Option<SpinResult> {
        if self.busy {
            trace!("wheel is busy, ignoring spin");
            return None;
        }

        let result = resolve(self.rotation, self.len(), self.rotations.clone(), rng);

        self.rotation = result.final_rotation;
        self.busy = true;
        debug!(
            rotation = result.final_rotation,
            landed = result.landed_index,
            "wheel spinning"
        );

        Some(result)
    }

    /// Ends the settle window and returns the landed segment.
    pub fn settle(&mut self, result: &SpinResult) -> Option<&Segment<T>> {
        if !self.busy {
            trace!("wheel is not spinning, nothing to settle");
            return None;
        }

        self.busy = false;
        self.segments.get(result.landed_index)
    }

    /// Drops an in-flight spin without delivering it.
    pub fn cancel(&mut self) {
        self.busy = false;
    }
}

impl Wheel<Wedge> {
    /// Classic value wheel. A value of 0 becomes a bankrupt wedge.
    pub fn points(values: &[u32]) -> Result<Self, Error> {
        let segments = values
            .iter()
            .map(|value| {
                let wedge = Wedge::from_value(*value);
                Segment::new(wedge, wedge.to_string())
            })
            .collect();

        Self::new(segments)
    }
}

impl Default for Wheel<Wedge> {
    fn default() -> Self {
        Self::points(&DEFAULT_VALUES).expect("default values are not empty")
    }
}
