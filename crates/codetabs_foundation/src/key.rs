//! Component and variant identifiers.
//!
//! Both are open string spaces that grow with the catalog, so they stay
//! strings. They are reference counted so tables and reports can share them.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::error::{Error, ErrorKind, Result};

macro_rules! string_key {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Arc<str>);

        impl $name {
            /// Creates a key, rejecting the empty string.
            ///
            /// # Errors
            ///
            /// Returns [`ErrorKind::EmptyKey`] if `value` is empty.
            pub fn try_new(value: impl AsRef<str>) -> Result<Self> {
                let value = value.as_ref();
                if value.is_empty() {
                    return Err(Error::new(ErrorKind::EmptyKey($what)));
                }
                Ok(Self(Arc::from(value)))
            }

            /// Returns the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), &*self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                &*self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                &*self.0 == *other
            }
        }

        #[cfg(feature = "serde")]
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }
    };
}

string_key!(
    /// Identifier of a documented component (e.g. `card`, `button-group`).
    ComponentId,
    "component"
);

string_key!(
    /// Identifier of a usage scenario within a component (e.g. `default`, `with-footer`).
    VariantKey,
    "variant"
);

impl VariantKey {
    /// The variant key tried by default-fallback lookups.
    pub const DEFAULT: &'static str = "default";

    /// Returns true if this is the `default` variant.
    #[must_use]
    pub fn is_default(&self) -> bool {
        &*self.0 == Self::DEFAULT
    }
}

/// The `(component, variant)` pair addressing a variant record.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LookupKey {
    /// The component identifier.
    pub component: ComponentId,
    /// The variant key.
    pub variant: VariantKey,
}

impl LookupKey {
    /// Creates a lookup key from already validated parts.
    #[must_use]
    pub fn new(component: ComponentId, variant: VariantKey) -> Self {
        Self { component, variant }
    }

    /// Creates a lookup key from raw strings.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::EmptyKey`] if either part is empty.
    pub fn parse(component: &str, variant: &str) -> Result<Self> {
        Ok(Self::new(
            ComponentId::try_new(component)?,
            VariantKey::try_new(variant)?,
        ))
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.component, self.variant)
    }
}
