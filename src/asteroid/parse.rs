use super::Cause;

use nom::character::complete::*;
use nom::combinator::*;
use nom::number::complete::double;
use nom::sequence::*;

type Result<'a, O> = nom::IResult<&'a str, O, nom::error::Error<&'a str>>;

fn padded<'a>(input: &'a str) -> Result<'a, f64> {
    all_consuming(delimited(multispace0, double, multispace0))(input)
}

// miss distances arrive as decimal strings, e.g. "0.2981376291"
pub(super) fn decimal(text: &str) -> std::result::Result<f64, Cause> {
    match padded(text) {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(Cause::Decimal(text.to_string())),
    }
}
