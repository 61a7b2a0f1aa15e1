//! Visitor platform classes used to pick a redirect target.

use std::fmt;

/// The platform class of a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    /// iPhone, iPad, iPod and Mac clients.
    IosFamily,
    Other,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Android => write!(f, "android"),
            Self::IosFamily => write!(f, "ios"),
            Self::Other => write!(f, "default"),
        }
    }
}
