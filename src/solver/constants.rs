// Configuration constants for the solver module
pub const MAX_RESULTS_DEFAULT: usize = 30;
/// Below this many left-hand expressions a split is combined on the calling thread
pub const PARALLEL_THRESHOLD: usize = 64;
