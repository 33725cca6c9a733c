mod logger;

use dft_utils::{constant_signal, dft};
use tracing::{debug, trace};

/// Length of the transform, fixed by the exported contract.
const TRANSFORM_POINTS: usize = 1024;

/// DC bin of the forward transform of an all-(1.0, 0.0) signal.
///
/// Under the unnormalised forward convention this is the sample count,
/// so the expected value is exactly 1024.0.
fn dc_gain() -> f64 {
    trace!("building constant input signal");
    let signal = constant_signal(TRANSFORM_POINTS, 1.0);
    let spectrum = dft::forward(&signal);
    let dc = dft::dc_component(&spectrum);
    debug!(points = TRANSFORM_POINTS, dc = dc);
    dc
}

/// Adds the DC gain of a 1024-point transform to `x`.
///
/// Exported unmangled with the C calling convention so external
/// callers can load the dynamic library and invoke it directly.
#[no_mangle]
pub extern "C" fn testing(x: f64) -> f64 {
    logger::initialise_logger();
    x + dc_gain()
}
