//! Target body of an impact

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::EARTH;

/// The body an impactor strikes
///
/// Only Earth impacts produce effects. Any other name is carried through
/// verbatim so it can be echoed back to the caller. On the wire the body is
/// its plain name, e.g. `"Earth"` or `"Mars"`; matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImpactBody {
    #[default]
    Earth,
    Other(String),
}

impl ImpactBody {
    pub fn name(&self) -> &str {
        match self {
            Self::Earth => EARTH,
            Self::Other(name) => name,
        }
    }

    pub fn is_earth(&self) -> bool {
        matches!(self, Self::Earth)
    }
}

impl From<String> for ImpactBody {
    fn from(name: String) -> Self {
        if name == EARTH {
            Self::Earth
        } else {
            Self::Other(name)
        }
    }
}

impl From<&str> for ImpactBody {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<ImpactBody> for String {
    fn from(body: ImpactBody) -> Self {
        match body {
            ImpactBody::Earth => EARTH.to_string(),
            ImpactBody::Other(name) => name,
        }
    }
}

impl fmt::Display for ImpactBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
