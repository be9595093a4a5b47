use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{anychar, char, digit1, line_ending, space0, space1};
use nom::combinator::{eof, map_res};
use nom::multi::{many0, many1, separated_list1};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::{Finish, IResult, Parser};

use crate::error::Error;
use crate::ship::{Crate, Move, Ship};

fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(digit1, |s| N::from_str(s)).parse(input)
}

fn air(input: &str) -> IResult<&str, Option<Crate>> {
    tag("   ").map(|_| None).parse(input)
}

fn krate(input: &str) -> IResult<&str, Option<Crate>> {
    delimited(char('['), anychar, char(']'))
        .map(|c| Some(Crate(c)))
        .parse(input)
}

// One row of the diagram, top row first in the input. Cells are either a
// bracketed crate or three spaces, one space apart.
fn row(input: &str) -> IResult<&str, Vec<Option<Crate>>> {
    terminated(separated_list1(char(' '), alt((air, krate))), line_ending).parse(input)
}

// The footer of stack numbers. Only its length matters: it fixes how many
// stacks the ship has.
fn names(input: &str) -> IResult<&str, Vec<usize>> {
    delimited(space0, separated_list1(space1, base10_numeric), space0).parse(input)
}

fn collate(rows: Vec<Vec<Option<Crate>>>, names: Vec<usize>) -> Ship {
    let mut stacks = vec![Vec::new(); names.len()];

    // Bottom row first, so each stack comes out ordered bottom-to-top.
    // Rows may be right-trimmed; a short row leaves the later stacks alone.
    for row in rows.into_iter().rev() {
        for (stack, cell) in stacks.iter_mut().zip(row) {
            if let Some(krate) = cell {
                stack.push(krate);
            }
        }
    }

    Ship::new(stacks)
}

fn ship(input: &str) -> IResult<&str, Ship> {
    pair(
        many1(row),
        terminated(names, pair(line_ending, many1(line_ending))),
    )
    .map(|(rows, names)| collate(rows, names))
    .parse(input)
}

fn single_move(input: &str) -> IResult<&str, Move> {
    tuple((
        preceded(pair(tag("move"), space1), base10_numeric),
        preceded(tuple((space1, tag("from"), space1)), base10_numeric),
        preceded(tuple((space1, tag("to"), space1)), base10_numeric),
    ))
    .map(|(count, from, to)| Move { count, from, to })
    .parse(input)
}

fn moves(input: &str) -> IResult<&str, Vec<Move>> {
    separated_list1(line_ending, single_move).parse(input)
}

fn end_of_input(input: &str) -> IResult<&str, ()> {
    terminated(many0(line_ending).map(|_| ()), eof).parse(input)
}

fn to_owned_error(e: nom::error::Error<&str>) -> nom::error::Error<String> {
    let nom::error::Error { input, code } = e;
    nom::error::Error {
        input: input.to_owned(),
        code,
    }
}

/// Parses a full input text: the crate diagram, its footer of stack
/// numbers, a blank separator line, then one move per line.
pub fn parse_input(input: &str) -> Result<(Ship, Vec<Move>), Error> {
    match terminated(pair(ship, moves), end_of_input)
        .parse(input)
        .finish()
    {
        Ok((_input, parsed)) => Ok(parsed),
        Err(e) => Err(Error::Parse(to_owned_error(e))),
    }
}
