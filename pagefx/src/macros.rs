#[cfg(feature = "tracing")]
macro_rules! fxtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "pagefx", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fxtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! fxdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "pagefx", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fxdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! fxwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "pagefx", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fxwarn {
    ($($tt:tt)*) => {};
}
