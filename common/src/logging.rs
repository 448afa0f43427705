/// Target used for status lines so front ends can style them apart from
/// ordinary diagnostics.
pub const STATUS_TARGET: &str = "srcbind::status";
pub const SUCCESS_TARGET: &str = "srcbind::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::logging::STATUS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::logging::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: $crate::logging::STATUS_TARGET, $($arg)*)
    };
}
