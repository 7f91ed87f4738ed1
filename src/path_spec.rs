use std::{convert::Infallible, fmt, str::FromStr};

use crate::error::ScpError;

/// Printed in place of a component that was not part of the spec
pub const ABSENT_COMPONENT: &str = "(null)";

/// One endpoint of a copy in the form `[[user@]addr:]file`
///
/// All components are slices of the string that was parsed, the input is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathSpec<'s> {
    user: Option<&'s str>,
    address: Option<&'s str>,
    file: &'s str,
}

impl<'s> PathSpec<'s> {
    /// Decompose `spec` into its components.
    ///
    /// The first `@` splits off the user, then the first `:` of what remains splits off the
    /// address. Any later `@` or `:` is an ordinary character. Every string is valid input.
    ///
    /// # Example
    /// ```
    /// use scp_demo::path_spec::PathSpec;
    ///
    /// let spec = PathSpec::parse("alice@host:dir/file.txt");
    /// assert_eq!(spec.user(), Some("alice"));
    /// assert_eq!(spec.address(), Some("host"));
    /// assert_eq!(spec.file(), "dir/file.txt");
    /// ```
    pub fn parse(spec: &'s str) -> Self {
        let (user, rest) = match spec.split_once('@') {
            Some((user, rest)) => (Some(user), rest),
            None => (None, spec),
        };
        let (address, file) = match rest.split_once(':') {
            Some((address, file)) => (Some(address), file),
            None => (None, rest),
        };
        Self {
            user,
            address,
            file,
        }
    }

    /// Like [`PathSpec::parse`] but for input that may be missing, e.g. an option that was never given.
    pub fn try_parse(spec: Option<&'s str>) -> Result<Self, ScpError> {
        spec.map(Self::parse)
            .ok_or(ScpError::InvalidArgument("no path spec to parse"))
    }

    pub fn user(&self) -> Option<&'s str> {
        self.user
    }

    pub fn address(&self) -> Option<&'s str> {
        self.address
    }

    pub fn file(&self) -> &'s str {
        self.file
    }

    /// A spec names a remote endpoint when it carries an address
    pub fn is_remote(&self) -> bool {
        self.address.is_some()
    }

    /// Copy the components out of the borrowed input
    pub fn to_owned_spec(&self) -> OwnedPathSpec {
        OwnedPathSpec {
            user: self.user.map(str::to_owned),
            address: self.address.map(str::to_owned),
            file: self.file.to_owned(),
        }
    }

    /// Writes the `user = ..`, `addr = ..`, `file = ..` lines of the diagnostic report
    pub fn write_components(&self, w: &mut dyn std::io::Write) -> std::io::Result<()> {
        writeln!(w, "  user = {}", self.user.unwrap_or(ABSENT_COMPONENT))?;
        writeln!(w, "  addr = {}", self.address.unwrap_or(ABSENT_COMPONENT))?;
        writeln!(w, "  file = {}", self.file)
    }
}

impl fmt::Display for PathSpec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user) = self.user {
            write!(f, "{user}@")?;
        }
        if let Some(address) = self.address {
            write!(f, "{address}:")?;
        }
        f.write_str(self.file)
    }
}

/// Owned counterpart of [`PathSpec`] for callers that need the components past the input's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OwnedPathSpec {
    pub user: Option<String>,
    pub address: Option<String>,
    pub file: String,
}

impl OwnedPathSpec {
    pub fn as_path_spec(&self) -> PathSpec<'_> {
        PathSpec {
            user: self.user.as_deref(),
            address: self.address.as_deref(),
            file: &self.file,
        }
    }
}

impl FromStr for OwnedPathSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PathSpec::parse(s).to_owned_spec())
    }
}

impl fmt::Display for OwnedPathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_path_spec().fmt(f)
    }
}
