//! ABI-stable enumeration tags carried in the flat parameter record.
//!
//! Each tag wraps the raw `i32` that the C layout stores. A value read from
//! foreign memory is therefore always representable, even when it names
//! nothing this build knows about. Unknown values survive a round trip and are
//! rejected only where they matter (the registry lookup).

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

use crate::error::ParamsError;

macro_rules! abi_tag {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$cmeta:meta])* $konst:ident = $value:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(i32);

        impl $name {
            $( $(#[$cmeta])* pub const $konst: Self = Self($value); )+

            /// Every named value, in ascending tag order.
            pub const ALL: &'static [Self] = &[$(Self::$konst),+];

            /// Wrap a raw tag without checking it.
            pub const fn from_raw(raw: i32) -> Self {
                Self(raw)
            }

            /// The raw value as stored in the C layout.
            pub const fn raw(self) -> i32 {
                self.0
            }

            /// Lowercase name, or `None` for values this build does not know.
            pub const fn name(self) -> Option<&'static str> {
                match self.0 {
                    $( $value => Some($label), )+
                    _ => None,
                }
            }

            pub const fn is_known(self) -> bool {
                self.name().is_some()
            }

            /// Look up a value by name, ignoring ASCII case.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|tag| tag.name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}", self.0),
                }
            }
        }

        impl FromStr for $name {
            type Err = ParamsError;

            /// Accepts a name (any case) or a decimal value, known or not.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if let Some(tag) = Self::from_name(s) {
                    return Ok(tag);
                }
                s.parse::<i32>()
                    .map(Self::from_raw)
                    .map_err(|_| ParamsError::InvalidValue {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                match self.name() {
                    Some(name) => serializer.serialize_str(name),
                    None => serializer.serialize_i32(self.0),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct TagVisitor;

                impl Visitor<'_> for TagVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(f, "a {} name or integer tag", $field)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        v.parse().map_err(E::custom)
                    }

                    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                        i32::try_from(v)
                            .map($name::from_raw)
                            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                        i32::try_from(v)
                            .map($name::from_raw)
                            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
                    }
                }

                deserializer.deserialize_any(TagVisitor)
            }
        }
    };
}

abi_tag! {
    /// Nearest-neighbour index algorithm.
    ///
    /// Buildable variants occupy `0..=3` so they can index a table directly.
    /// `SAVED` and `AUTOTUNED` sit at the top of the byte range.
    AlgorithmId, "algorithm" {
        /// Exact linear scan.
        LINEAR = 0 => "linear",
        /// Forest of randomized k-d trees.
        KDTREE = 1 => "kdtree",
        /// Hierarchical k-means tree.
        KMEANS = 2 => "kmeans",
        /// k-d forest and k-means tree searched together.
        COMPOSITE = 3 => "composite",
        /// Load a previously persisted index.
        SAVED = 254 => "saved",
        /// Let the autotuner pick an algorithm and its knobs.
        AUTOTUNED = 255 => "autotuned",
    }
}

abi_tag! {
    /// How the k-means tree picks its initial cluster centers.
    CentersInit, "centers_init" {
        RANDOM = 0 => "random",
        GONZALES = 1 => "gonzales",
        KMEANSPP = 2 => "kmeanspp",
    }
}

abi_tag! {
    /// Verbosity of library diagnostics. Higher values are more verbose.
    LogLevel, "log_level" {
        NONE = 0 => "none",
        FATAL = 1 => "fatal",
        ERROR = 2 => "error",
        WARN = 3 => "warn",
        INFO = 4 => "info",
    }
}

impl AlgorithmId {
    /// Number of buildable variants addressable through [`Self::table_index`].
    pub const BUILDABLE: usize = 4;

    /// Position of a buildable variant in a dense table.
    ///
    /// `None` for `SAVED`, `AUTOTUNED` and unknown tags.
    pub const fn table_index(self) -> Option<usize> {
        match self.0 {
            0..=3 => Some(self.0 as usize),
            _ => None,
        }
    }
}

/// The built-in algorithms as a closed enum, for exhaustive matching.
///
/// The open [`AlgorithmId`] is what crosses the ABI; convert with
/// [`Algorithm::from_id`] once a tag has to mean something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Linear,
    KDTree,
    KMeans,
    Composite,
    Saved,
    Autotuned,
}

impl Algorithm {
    pub const ALL: [Self; 6] = [
        Self::Linear,
        Self::KDTree,
        Self::KMeans,
        Self::Composite,
        Self::Saved,
        Self::Autotuned,
    ];

    pub const fn id(self) -> AlgorithmId {
        match self {
            Self::Linear => AlgorithmId::LINEAR,
            Self::KDTree => AlgorithmId::KDTREE,
            Self::KMeans => AlgorithmId::KMEANS,
            Self::Composite => AlgorithmId::COMPOSITE,
            Self::Saved => AlgorithmId::SAVED,
            Self::Autotuned => AlgorithmId::AUTOTUNED,
        }
    }

    /// `None` for tags this build does not know.
    pub fn from_id(id: AlgorithmId) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.id() == id)
    }
}

impl From<Algorithm> for AlgorithmId {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.id()
    }
}

impl Default for AlgorithmId {
    fn default() -> Self {
        Self::KDTREE
    }
}

impl Default for CentersInit {
    fn default() -> Self {
        Self::RANDOM
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::NONE
    }
}

impl LogLevel {
    /// Maximum `tracing` level that this verbosity lets through.
    ///
    /// There is no FATAL level in `tracing`; it shares ERROR.
    pub const fn level_filter(self) -> LevelFilter {
        match self.0 {
            i32::MIN..=0 => LevelFilter::OFF,
            1 | 2 => LevelFilter::ERROR,
            3 => LevelFilter::WARN,
            _ => LevelFilter::INFO,
        }
    }
}
