/// Emit a [`tracing`] event if the `tracing` feature is enabled and do
/// nothing otherwise.
///
/// [`tracing`]: https://docs.rs/tracing
macro_rules! log {
    ( $level:ident, $( $arg:tt )* ) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!($( $arg )*);
        }
    };
}
