use crate::error::SourceError;
use crate::network::address::AddressFamily;
use crate::network::source::SourceBinding;

pub struct Config {
    /// Family every source and destination must belong to.
    pub family: AddressFamily,
    /// Literal to bind outbound sockets to, if any.
    ///
    /// Kept as text so validation happens in one place.
    pub source: Option<String>,
    pub quiet: bool,
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            family: AddressFamily::Unspecified,
            source: None,
            quiet: false,
            no_color: false,
        }
    }
}

impl Config {
    /// The validated source address, when one was requested.
    pub fn source_binding(&self) -> Result<Option<SourceBinding>, SourceError> {
        self.source
            .as_deref()
            .map(|literal| SourceBinding::new(literal, self.family))
            .transpose()
    }

    /// The explicit source, or the family wildcard when only the family was
    /// constrained. `None` means nothing to bind to.
    pub fn bind_source(&self) -> Result<Option<SourceBinding>, SourceError> {
        Ok(self
            .source_binding()?
            .or_else(|| SourceBinding::wildcard(self.family)))
    }
}
