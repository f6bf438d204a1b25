//! User alert port.

/// Blocking notification shown to the user.
///
/// Used only to report rejected form input.
#[cfg_attr(test, mockall::automock)]
pub trait Alert {
    /// Shows `message` and returns once the user has acknowledged it.
    fn alert(&self, message: &str);
}
