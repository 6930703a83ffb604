use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, delimited, opt, separated, separated_pair};
use winnow::error::{ContextError, ErrMode, ModalResult};
use winnow::prelude::*;
use winnow::token::{one_of, take_till, take_while};

// -- Field paths --------------------------------------------------------------

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

pub(super) fn field_path<'i>(input: &mut &'i str) -> ModalResult<Vec<&'i str>> {
    separated(1.., ident, '.').parse_next(input)
}

// -- Numbers ------------------------------------------------------------------

/// No leading zeros on the whole part: MVEL reads `010` as octal.
fn whole<'i>(input: &mut &'i str) -> ModalResult<()> {
    alt(("0".void(), (one_of('1'..='9'), digit0).void())).parse_next(input)
}

pub(super) fn number<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (opt('-'), whole, opt(('.', digit1)))
        .take()
        .parse_next(input)
}

// -- Dates --------------------------------------------------------------------

fn two_digits<'i>(min: u32, max: u32) -> impl Parser<&'i str, &'i str, ErrMode<ContextError>> {
    take_while(2, |c: char| c.is_ascii_digit())
        .verify(move |s: &str| s.parse::<u32>().is_ok_and(|n| (min..=max).contains(&n)))
}

fn time_of_day<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        one_of(['T', ' ']),
        two_digits(0, 23),
        ':',
        two_digits(0, 59),
        opt((':', two_digits(0, 59))),
    )
        .take()
        .parse_next(input)
}

pub(super) fn date<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(4, |c: char| c.is_ascii_digit()),
        '-',
        two_digits(1, 12),
        '-',
        two_digits(1, 31),
        opt(time_of_day),
    )
        .take()
        .parse_next(input)
}

// -- Ranges -------------------------------------------------------------------

fn bound<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_till(1.., |c: char| c == ',' || c == '[' || c == ']')
        .map(str::trim)
        .parse_next(input)
}

fn bounds<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    separated_pair(bound, ',', bound).parse_next(input)
}

pub(super) fn range<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    alt((delimited('[', bounds, ']'), bounds)).parse_next(input)
}
