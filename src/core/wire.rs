//! Lenient field deserializers shared by the dataset wire models.
//!
//! The provider mixes JSON numbers with numeric text (`"24,315.95"`), booleans with
//! `"true"`/`"false"`, and uses `"-"` or `""` for "no value".

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::core::dates::normalize_provider_date;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrText {
    Num(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyCount {
    U64(u64),
    F64(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Num(i64),
    Float(f64),
    Text(String),
}

/// Parses numeric text with thousands separators. Placeholders yield `None`.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || cleaned == "-" || cleaned.eq_ignore_ascii_case("na") {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub(crate) fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumOrText>::deserialize(deserializer)? {
        Some(NumOrText::Num(n)) => Ok(Some(n)),
        Some(NumOrText::Text(s)) => {
            let parsed = parse_number(&s);
            let placeholder = matches!(s.trim(), "" | "-") || s.trim().eq_ignore_ascii_case("na");
            if parsed.is_none() && !placeholder {
                return Err(D::Error::custom(format!("'{s}' is not a number")));
            }
            Ok(parsed)
        }
        None => Ok(None),
    }
}

pub(crate) fn req_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    opt_f64(deserializer)?.ok_or_else(|| D::Error::custom("missing numeric value"))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let as_count = |f: f64| {
        if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 {
            Ok(Some(f as u64))
        } else {
            Err(D::Error::custom(format!("cannot convert {f} to a count")))
        }
    };
    match Option::<AnyCount>::deserialize(deserializer)? {
        Some(AnyCount::U64(u)) => Ok(Some(u)),
        Some(AnyCount::F64(f)) => as_count(f),
        Some(AnyCount::Text(s)) => match parse_number(&s) {
            Some(f) => as_count(f),
            None => Ok(None),
        },
        None => Ok(None),
    }
}

/// Missing, `null` and unrecognised text all read as `false`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<FlagRepr>::deserialize(deserializer)? {
        Some(FlagRepr::Bool(b)) => b,
        Some(FlagRepr::Num(n)) => n != 0,
        Some(FlagRepr::Float(f)) => f != 0.0,
        Some(FlagRepr::Text(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        ),
        None => false,
    })
}

/// Unparseable or placeholder dates read as `None`.
pub(crate) fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(normalize_provider_date))
}

pub(crate) fn req_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    normalize_provider_date(&text)
        .ok_or_else(|| D::Error::custom(format!("unrecognised date '{text}'")))
}

/// `null` reads as an empty string.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|s| s.trim().to_string())
        .unwrap_or_default())
}
