use rustfft::{num_complex::Complex, FftPlanner};

/// Applies an unnormalised forward DFT to `signal` and returns the
/// frequency-domain buffer.
///
/// The plan, the time-domain copy, and the scratch space are all owned
/// by this call and dropped on return.
pub fn forward(signal: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut planner = FftPlanner::<f64>::new();
    let plan = planner.plan_fft_forward(signal.len());

    let mut time_domain = signal.to_vec();
    let mut frequency_domain = vec![Complex::default(); signal.len()];
    let mut scratch = vec![Complex::default(); plan.get_outofplace_scratch_len()];
    plan.process_outofplace_with_scratch(&mut time_domain, &mut frequency_domain, &mut scratch);

    frequency_domain
}

/// Real part of bin zero, the unnormalised sum of the input samples.
pub fn dc_component(spectrum: &[Complex<f64>]) -> f64 {
    spectrum[0].re
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant_signal;

    #[test]
    fn constant_signal_concentrates_at_bin_zero() {
        let spectrum = forward(&constant_signal(1024, 1.0));
        assert!((spectrum[0].re - 1024.0).abs() < 1e-9);
        assert!(spectrum[0].im.abs() < 1e-9);
        for bin in &spectrum[1..] {
            assert!(bin.norm() < 1e-6);
        }
    }

    #[test]
    fn impulse_spreads_across_every_bin() {
        let mut signal = constant_signal(8, 0.0);
        signal[0].re = 1.0;
        let spectrum = forward(&signal);
        for bin in &spectrum {
            assert!((bin.re - 1.0).abs() < 1e-9);
            assert!(bin.im.abs() < 1e-9);
        }
    }

    #[test]
    fn dc_component_reads_the_first_bin() {
        let spectrum = forward(&constant_signal(16, 0.5));
        assert!((dc_component(&spectrum) - 8.0).abs() < 1e-9);
    }
}
