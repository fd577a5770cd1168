//! Execution realm identity.
//!
//! A realm is an isolated execution context with its own set of built-in
//! constructors. Values created by one realm are not brand-compatible with
//! another realm's constructors, so brand-checked conversions compare the
//! realm a value was created in against the realm the check validates for.

/// Opaque identity of an execution realm.
///
/// The default realm (`RealmId::default()`) is the realm the conversion
/// layer itself is defined in. Brand checks validate against it unless the
/// caller supplies a different realm through the conversion options.
///
/// # Examples
///
/// ```
/// use core_types::RealmId;
///
/// let host = RealmId::default();
/// let worker = RealmId::new(1);
/// assert_ne!(host, worker);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RealmId(u64);

impl RealmId {
    /// Create a realm identity from a raw id.
    ///
    /// Id 0 is the default (host) realm.
    pub const fn new(id: u64) -> Self {
        RealmId(id)
    }

    /// Get the raw realm id.
    pub const fn id(self) -> u64 {
        self.0
    }
}
