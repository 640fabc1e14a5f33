//! `add`: sum two integers, a quick sanity check that parsing and dispatch
//! are wired up. Accepts decimal and `0x`-prefixed hex, either negative.

use crate::compat::format;
use crate::console::Console;
use crate::error::ConsoleError;

fn parse_int(s: &str) -> Result<i64, ConsoleError> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let magnitude = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16)
    } else {
        body.parse()
    }
    .map_err(|_| ConsoleError::BadArgument(format!("\"{}\" is not a number", s)))?;

    Ok(if negative { -magnitude } else { magnitude })
}

pub fn run(console: &mut Console) -> Result<(), ConsoleError> {
    let a = parse_int(console.arg(1))?;
    let b = parse_int(console.arg(2))?;
    let sum = a.wrapping_add(b);
    let line = format!("{} + {} = {}", a, b, sum);
    console.println(&line);
    Ok(())
}
