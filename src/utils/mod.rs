mod util;

pub use util::{handle_error_and_exit, is_gzipped, Result};
