//! Set of useful parser combinators

// standard library
use std::format as f;

// internal modules
use crate::error::{Error, Result};

// external crates
use log::trace;

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{alpha1, one_of, space0};
use nom::combinator::{all_consuming, opt};
use nom::error::ErrorKind;
use nom::number::complete::double;
use nom::sequence::delimited;
use nom::{self, Err, IResult};

/// Split an isotope symbol into its element and mass number
///
/// Accepts `<element><separator><mass>`, where the separator is optional and
/// may be any of `-`, `_` or a space. The element is capitalised.
///
/// ```rust
/// # use isochart_ensdf::split_symbol;
/// assert_eq!(split_symbol("U-238").unwrap(), ("U".to_string(), 238));
/// assert_eq!(split_symbol("co60").unwrap(), ("Co".to_string(), 60));
/// assert_eq!(split_symbol("He_4").unwrap(), ("He".to_string(), 4));
///
/// // Mass number is required
/// assert!(split_symbol("Fe").is_err());
/// ```
pub fn split_symbol(s: &str) -> Result<(String, u16)> {
    let (_, (element, mass)) = all_consuming(isotope)(s.trim())
        .map_err(|_| Error::ParseError(f!("could not split isotope symbol \"{s}\"")))?;
    Ok((capitalise(element), mass))
}

/// Capitalise the first letter and lower the rest, e.g. `CO` to `Co`
pub fn capitalise(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().collect::<String>() + &c.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Parse a numeric field that may carry ENSDF decorations
///
/// Limits and approximations such as `<0.1`, `>99`, `~50` or `≈1.2` keep the
/// number. Anything else (`STABLE`, `?`, blanks) is not a measurement and gives
/// `NaN`.
pub(crate) fn number_or_nan(s: &str) -> f64 {
    match all_consuming(decorated_number)(s.trim()) {
        Ok((_, value)) => value,
        Err(_) => {
            if !s.trim().is_empty() {
                trace!("\"{s}\" is not a measured value");
            }
            f64::NAN
        }
    }
}

/// Element followed by mass number
fn isotope(i: &str) -> IResult<&str, (&str, u16)> {
    let (i, element) = element(i)?;
    let (i, _) = opt(separator)(i)?;
    let (i, mass) = nom::character::complete::u16(i)?;
    Ok((i, (element, mass)))
}

/// Get the element symbol
fn element(i: &str) -> IResult<&str, &str> {
    let (i, element) = alpha1(i)?;

    if element.len() > 2 {
        Err(Err::Error(nom::error::Error::new(i, ErrorKind::Fail)))
    } else {
        Ok((i, element))
    }
}

/// List of possible separators people may use
fn separator(i: &str) -> IResult<&str, char> {
    one_of("_- ")(i)
}

/// Value with an optional leading limit or approximation operator
fn decorated_number(i: &str) -> IResult<&str, f64> {
    let (i, _) = opt(delimited(space0, operator, space0))(i)?;
    double(i)
}

/// Operators used in ENSDF and the IAEA tables for limits and approximations
fn operator(i: &str) -> IResult<&str, &str> {
    alt((
        nom::bytes::complete::tag("<="),
        nom::bytes::complete::tag(">="),
        nom::bytes::complete::tag("<"),
        nom::bytes::complete::tag(">"),
        nom::bytes::complete::tag("~"),
        nom::bytes::complete::tag("≈"),
        nom::bytes::complete::tag("AP"),
        nom::bytes::complete::tag("LT"),
        nom::bytes::complete::tag("GT"),
    ))(i)
}
