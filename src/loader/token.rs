//! Request tokens for stale-response rejection.

use std::fmt;

/// Identifies one dispatched fetch.
///
/// Tokens are issued in strictly increasing order per loader. A response is
/// applied only while its token is still the loader's current token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub(crate) struct TokenIssuer {
    last: u64,
}

impl TokenIssuer {
    pub(crate) fn issue(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}
