#![warn(clippy::default_trait_access)]
#![warn(clippy::if_not_else)]
#![warn(clippy::needless_continue)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::explicit_into_iter_loop)]

mod run;

use clap::{load_yaml, App};

const BOLD_ANSI_CODE: &str = "\x1b[1m";
const RESET_ANSI_CODE: &str = "\x1b[0m";

fn main() -> anyhow::Result<()> {
    cantor::utils::init_logging()?;

    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml).get_matches();
    let result = match matches.subcommand() {
        ("n2q", Some(sub)) => run::n2q(sub)?,
        ("q2n", Some(sub)) => run::q2n(sub)?,
        ("print", Some(sub)) => {
            run::print(sub)?;
            return Ok(());
        }
        ("interactive", Some(_)) => {
            run::interactive()?;
            return Ok(());
        }
        (name, _) => anyhow::bail!("Unknown subcommand: {name}"),
    };
    println!("{BOLD_ANSI_CODE}{result}{RESET_ANSI_CODE}");
    Ok(())
}
