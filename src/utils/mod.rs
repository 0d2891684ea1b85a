//! Small general-purpose helpers.

mod timing;

pub use timing::timed;

use std::str::FromStr;

/// Returns whether `value` parses as `T`.
///
/// ```
/// use droid_utils::utils::is_convertible;
///
/// assert!(is_convertible::<i32>("727"));
/// assert!(!is_convertible::<i32>("7.27"));
/// ```
pub fn is_convertible<T: FromStr>(value: &str) -> bool {
    value.parse::<T>().is_ok()
}
