//! Line-oriented prompts that re-ask until the answer validates.
//!
//! Prompts go to stderr so that stdout stays clean for results.

use std::fmt::Display;
use std::io::{self, stderr, stdin, BufRead, Write};
use std::str::FromStr;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(stdin().lock(), stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until the answer parses and validates. Blank input or end of input yields `None`.
    pub fn optional<S, T: FromStr, F>(&mut self, prompt: &str, validator: F) -> io::Result<Option<S>>
    where
        F: Fn(T) -> Result<S, String>,
        <T as FromStr>::Err: Display,
    {
        self.inner(prompt, |x| match x {
            None | Some("") => Ok(None),
            Some(x) => parse_with(x, &validator).map(Some),
        })
    }

    /// The validator sees `None` once the input is exhausted.
    fn inner<S, F>(&mut self, prompt: &str, validator: F) -> io::Result<Option<S>>
    where
        F: for<'a> Fn(Option<&'a str>) -> Result<Option<S>, String>,
    {
        loop {
            write!(self.output, "{prompt} : ")?;
            self.output.flush()?;

            let mut input = String::new();
            let answer = match self.input.read_line(&mut input)? {
                0 => None,
                _ => Some(input.trim()),
            };
            match validator(answer) {
                Ok(res) => return Ok(res),
                Err(e) => writeln!(self.output, "Invalid input: {e}. Try again")?,
            }
        }
    }
}

fn parse_with<S, T: FromStr, F>(x: &str, validator: &F) -> Result<S, String>
where
    F: Fn(T) -> Result<S, String>,
    <T as FromStr>::Err: Display,
{
    x.parse::<T>()
        .map_err(|err| err.to_string())
        .and_then(validator)
}
