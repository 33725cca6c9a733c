pub mod dft;

use rustfft::num_complex::Complex;

/// Builds a signal of `len` samples, each holding `value` in the real
/// component and zero in the imaginary component.
pub fn constant_signal(len: usize, value: f64) -> Vec<Complex<f64>> {
    vec![Complex { re: value, im: 0.0 }; len]
}
