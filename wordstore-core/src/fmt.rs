//! Logging shims
//!
//! Forwards to `defmt` when the feature is enabled and compiles the
//! log statements away otherwise.

#![allow(unused_macros, unused_imports)]

#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, error, info, warn};

// Stub macros when defmt is not available. Arguments are still borrowed so
// values that only feed a log line don't trip unused warnings.
#[cfg(not(feature = "defmt"))]
macro_rules! stub_warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! stub_info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! stub_debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! stub_error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

#[cfg(not(feature = "defmt"))]
pub(crate) use stub_debug as debug;
#[cfg(not(feature = "defmt"))]
pub(crate) use stub_error as error;
#[cfg(not(feature = "defmt"))]
pub(crate) use stub_info as info;
#[cfg(not(feature = "defmt"))]
pub(crate) use stub_warn as warn;
