//! This file contains code used by main.rs

use std::fmt::{self, Display, Formatter};
use std::io::stdout;
use std::str::FromStr;

use anyhow::Context;
use cantor::utils::{print_enumeration, Config};
use cantor::{Enumerator, InvalidArgument, Ratio, Rejection};
use clap::{value_t, ArgMatches};
use query::Prompter;

pub fn n2q(matches: &ArgMatches<'_>) -> anyhow::Result<String> {
    let k = value_t!(matches, "index", i64)?;
    Ok(cantor::sequence_to_fraction(k)?.to_string())
}

/// A fraction that is not enumerated is a normal answer. Only malformed input is an error.
pub fn q2n(matches: &ArgMatches<'_>) -> anyhow::Result<String> {
    let input = matches
        .value_of("fraction")
        .context("Missing fraction")?;
    match cantor::sequence_of(input) {
        Ok(k) => Ok(k.to_string()),
        Err(Rejection::NotEnumerated(reason)) => Ok(format!("{input} is not enumerated: {reason}")),
        Err(Rejection::Invalid(e)) => Err(e.into()),
    }
}

pub fn print(matches: &ArgMatches<'_>) -> anyhow::Result<()> {
    let config = Config::try_from(matches)?;
    print_enumeration(&config, &mut stdout().lock())
}

#[derive(Debug, PartialEq, Eq)]
enum Query {
    Index(i64),
    Fraction(Ratio),
}

impl FromStr for Query {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('/') {
            s.parse().map(Query::Fraction)
        } else {
            s.parse()
                .map(Query::Index)
                .map_err(|source| InvalidArgument::NotAnInteger {
                    token: s.to_string(),
                    source,
                })
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Query::Index(k) => write!(f, "{k}"),
            Query::Fraction(r) => write!(f, "{r}"),
        }
    }
}

pub fn interactive() -> anyhow::Result<()> {
    let mut prompter = Prompter::stdio();
    let mut enumerator = Enumerator::new();

    while let Some(query) = prompter.optional("Index or fraction n/d", |q: Query| match q {
        Query::Index(k) if k < 0 => Err(InvalidArgument::NegativeIndex(k).to_string()),
        q => Ok(q),
    })? {
        let answer = match &query {
            Query::Index(k) => enumerator.sequence_to_fraction(*k)?.to_string(),
            Query::Fraction(r) => match enumerator.index_of(r.numerator, r.denominator) {
                Ok(k) => k.to_string(),
                Err(reason) => format!("not enumerated: {reason}"),
            },
        };
        println!("{query} -> {answer}");
    }
    Ok(())
}
