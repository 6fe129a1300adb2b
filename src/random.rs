use rand::{rngs::StdRng, rngs::ThreadRng, Rng, SeedableRng};

/// Source of uniform randomness for the wheel, puzzle selection and clues.
///
/// Engines take one of these by value so tests can script the outcomes.
pub trait RandomSource {
    /// Uniform integer in `0..n`. `n` must be at least 1.
    fn uniform_int(&mut self, n: usize) -> usize;

    /// Uniform float in `0.0..1.0`.
    fn uniform_float(&mut self) -> f64;

    /// Fisher–Yates shuffle in place.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.uniform_int(i + 1);
            items.swap(i, j);
        }
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            items.get(self.uniform_int(items.len()))
        }
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform_int(&mut self, n: usize) -> usize {
        (**self).uniform_int(n)
    }

    fn uniform_float(&mut self) -> f64 {
        (**self).uniform_float()
    }
}

/// [`RandomSource`] backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

pub type ThreadRandom = RngSource<ThreadRng>;
pub type SeededRandom = RngSource<StdRng>;

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_int(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot pick from an empty range");
        self.rng.gen_range(0..n)
    }

    fn uniform_float(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Scripted randomness for tests: replays fixed ints and floats in order,
/// wrapping around once exhausted.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    ints: Vec<usize>,
    floats: Vec<f64>,
    int_cursor: usize,
    float_cursor: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn ints(ints: impl Into<Vec<usize>>) -> Self {
        Self {
            ints: ints.into(),
            floats: vec![0.5],
            ..Self::default()
        }
    }

    pub fn with_floats(mut self, floats: impl Into<Vec<f64>>) -> Self {
        self.floats = floats.into();
        self
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn uniform_int(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot pick from an empty range");

        let value = self.ints.get(self.int_cursor).copied().unwrap_or_default();
        self.int_cursor = (self.int_cursor + 1) % self.ints.len().max(1);
        value % n
    }

    fn uniform_float(&mut self) -> f64 {
        let value = self.floats.get(self.float_cursor).copied().unwrap_or(0.5);
        self.float_cursor = (self.float_cursor + 1) % self.floats.len().max(1);
        value
    }
}
