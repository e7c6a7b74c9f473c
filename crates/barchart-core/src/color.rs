// File: crates/barchart-core/src/color.rs
// Summary: Injectable bar color sources (random by default, fixed for tests).

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::theme::Rgba;

/// Supplies one opaque base color per bar, in bar order.
pub trait ColorSource {
    fn next_color(&mut self) -> Rgba;
}

impl<C: ColorSource + ?Sized> ColorSource for &mut C {
    fn next_color(&mut self) -> Rgba {
        (**self).next_color()
    }
}

/// Three independent uniform channels in `0..=255`.
#[derive(Debug)]
pub struct RandomColors<R = ThreadRng> {
    rng: R,
}

impl RandomColors<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

impl Default for RandomColors<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomColors<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> Rgba {
        let r = self.rng.gen_range(0..=255u8);
        let g = self.rng.gen_range(0..=255u8);
        let b = self.rng.gen_range(0..=255u8);
        Rgba::rgb(r, g, b)
    }
}

/// Cycles through a fixed palette.
#[derive(Clone, Debug)]
pub struct FixedColors {
    palette: Vec<Rgba>,
    next: usize,
}

impl FixedColors {
    /// An empty palette yields mid grey.
    pub fn new(palette: Vec<Rgba>) -> Self {
        Self { palette, next: 0 }
    }
}

impl ColorSource for FixedColors {
    fn next_color(&mut self) -> Rgba {
        if self.palette.is_empty() {
            return Rgba::rgb(128, 128, 128);
        }
        let c = self.palette[self.next % self.palette.len()];
        self.next += 1;
        c
    }
}
