//! `format!`-style shorthands for the format form of each level.
//!
//! ```rust,no_run
//! use sentinel_log::{default_logger, errorf};
//! errorf!(default_logger(), "code={}", 42);
//! ```

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.debugf(::std::format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.infof(::std::format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.warnf(::std::format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.errorf(::std::format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.fatalf(::std::format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.panicf(::std::format_args!($($arg)+))
    }};
}
