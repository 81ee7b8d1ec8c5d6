/// Every external suggestion source implements this trait.
///
/// Adapters are stateless between calls: the credential is read once at
/// construction. `suggest()` must never fail; any error is mapped to the
/// adapter's fallback text.
pub trait SuggestionAdapter: Send + Sync {
    /// Unique identifier (e.g. "music", "workout", "creative").
    fn name(&self) -> &str;

    /// Whether a credential string was supplied.
    fn is_configured(&self) -> bool;

    /// A short descriptive suggestion.
    fn suggest(&self) -> String;
}
