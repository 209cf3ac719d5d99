//! Distance metric and element datatype tags, plus the accumulator mapping.
//!
//! Narrow element types overflow or lose precision when squared differences
//! are summed in the element type itself. [`ElementType::Distance`] names the
//! type a distance kernel should accumulate in; it is resolved at compile time.

use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

/// Metric family used by the external distance kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum DistanceKind {
    Euclidean = 1,
    Manhattan = 2,
    Minkowski = 3,
}

/// Storage type of a vector element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum DataType {
    Int8 = 0,
    Int16 = 1,
    Int32 = 2,
    Int64 = 3,
    Uint8 = 4,
    Uint16 = 5,
    Uint32 = 6,
    Uint64 = 7,
    Float32 = 8,
    Float64 = 9,
}

impl TryFrom<i32> for DistanceKind {
    type Error = ParamsError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(Self::Euclidean),
            2 => Ok(Self::Manhattan),
            3 => Ok(Self::Minkowski),
            _ => Err(ParamsError::InvalidValue {
                field: "distance",
                value: raw.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for DataType {
    type Error = ParamsError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Ok(match raw {
            0 => Self::Int8,
            1 => Self::Int16,
            2 => Self::Int32,
            3 => Self::Int64,
            4 => Self::Uint8,
            5 => Self::Uint16,
            6 => Self::Uint32,
            7 => Self::Uint64,
            8 => Self::Float32,
            9 => Self::Float64,
            _ => {
                return Err(ParamsError::InvalidValue {
                    field: "datatype",
                    value: raw.to_string(),
                });
            }
        })
    }
}

impl DataType {
    /// Width of one element in bytes.
    pub const fn size_of(self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Int64 | Self::Uint64 | Self::Float64 => 8,
        }
    }

    /// Runtime mirror of [`ElementType::Distance`] for callers that only hold
    /// a datatype tag.
    pub const fn distance_type(self) -> DataType {
        match self {
            Self::Uint8 | Self::Int32 => Self::Float32,
            other => other,
        }
    }
}

/// A vector element type and the type its distances accumulate in.
pub trait ElementType: Copy + Send + Sync + 'static {
    /// Accumulator for sums of per-dimension distance contributions.
    type Distance: Copy + Send + Sync + 'static;

    /// Datatype tag for this element type.
    const DATATYPE: DataType;
}

/// Accumulator type for distances over vectors of `T`.
pub type DistanceType<T> = <T as ElementType>::Distance;

macro_rules! element_type {
    ($($elem:ty => $dist:ty, $tag:ident;)+) => {
        $(
            impl ElementType for $elem {
                type Distance = $dist;
                const DATATYPE: DataType = DataType::$tag;
            }
        )+
    };
}

element_type! {
    i8 => i8, Int8;
    i16 => i16, Int16;
    i32 => f32, Int32;
    i64 => i64, Int64;
    u8 => f32, Uint8;
    u16 => u16, Uint16;
    u32 => u32, Uint32;
    u64 => u64, Uint64;
    f32 => f32, Float32;
    f64 => f64, Float64;
}
