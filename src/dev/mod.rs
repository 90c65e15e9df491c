/// Development utilities
///
/// Only compiled with the `development` feature; Shift-S in the interactive
/// picker saves a text screenshot of the current frame.

pub mod screenshot;
