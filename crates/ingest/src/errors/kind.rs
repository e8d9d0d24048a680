/// Classification of feed errors.
///
/// | Kind | Raised | Retry here? |
/// |------|--------|-------------|
/// | `Configuration` | At construction, before any I/O | No, fix the config |
/// | `Upstream` | During the fetch (status, timeout, transport, decode) | No, retry policy belongs to the caller |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A required setting (the proxy credential) is missing or invalid.
    Configuration,

    /// The provider or the path to it failed.
    ///
    /// Covers non-success HTTP statuses, the request timeout, transport
    /// failures and unparseable bodies. The snapshot is aborted with no
    /// partial result.
    Upstream,
}
