//! Per-call conversion configuration.

use core_types::{ConversionError, ConversionResult, RealmId};

/// Options recognized by the conversion functions.
///
/// Each function reads only the options that apply to it and ignores the
/// rest; the default value (everything off, no realm override) is
/// equivalent to passing no configuration at all.
///
/// # Examples
///
/// ```
/// use conversions::ConversionOptions;
///
/// let opts = ConversionOptions {
///     clamp: true,
///     ..Default::default()
/// };
/// assert!(opts.clamp);
/// assert!(!opts.enforce_range);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversionOptions {
    /// Reject out-of-range or non-finite numeric input instead of wrapping.
    pub enforce_range: bool,
    /// Saturate out-of-range numeric input to the nearest bound.
    pub clamp: bool,
    /// Map a null input to the empty string before stringification.
    pub treat_null_as_empty_string: bool,
    /// Accept shared-memory buffers where they are otherwise rejected.
    pub allow_shared: bool,
    /// Accept resizable or growable buffers where they are otherwise rejected.
    pub allow_resizable: bool,
    /// Validate brand checks against this realm instead of the default one.
    pub realm: Option<RealmId>,
}

/// Check a brand-carrying value's realm against the identity policy.
///
/// The policy is the converter's own realm unless the caller overrides it.
pub(crate) fn check_realm(
    actual: RealmId,
    options: &ConversionOptions,
    what: &str,
) -> ConversionResult<()> {
    let expected = options.realm.unwrap_or_default();
    if actual != expected {
        return Err(ConversionError::type_error(format!(
            "{} belongs to a different realm",
            what
        )));
    }
    Ok(())
}
