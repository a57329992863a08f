//! Serialize values through their `Display` implementations when they do not
//! implement `Serialize` themselves. Annotate a field with either
//! `#[serde(serialize_with = "from_display")]` or
//! `#[serde(serialize_with = "option_from_display")]`
//! depending on whether the type is nested in an `Option`.
use std::fmt::Display;

use serde::Serializer;

pub fn option_from_display<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    if let Some(value) = value {
        from_display(value, serializer)
    } else {
        serializer.serialize_none()
    }
}

pub fn from_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
