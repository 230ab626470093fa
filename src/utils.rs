use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use chart::{Backend, SvgBackend, TikzBackend};
use clap::{value_t, ArgMatches};
use tracing_subscriber::EnvFilter;

use crate::report;

/// Log to stderr, filtered by `RUST_LOG` (warnings and above by default).
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!(e))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Svg,
    Tikz,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartTarget {
    pub kind: ChartKind,
    pub path: PathBuf,
}

/// A request to print the first `end` fractions of the enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub end: u64,
    pub format: Format,
    pub charts: Vec<ChartTarget>,
    /// Draw the walk through every visited lattice point, not only the enumerated ones.
    pub draw_walk: bool,
}

impl TryFrom<&ArgMatches<'_>> for Config {
    type Error = anyhow::Error;

    fn try_from(matches: &ArgMatches<'_>) -> Result<Self, Self::Error> {
        let end = value_t!(matches, "end", u64).context("Invalid end")?;

        let mut charts = Vec::new();
        for (arg, kind) in [("svg", ChartKind::Svg), ("tikz", ChartKind::Tikz)] {
            if let Some(path) = matches.value_of(arg) {
                charts.push(ChartTarget {
                    kind,
                    path: PathBuf::from(path),
                });
            }
        }

        Ok(Config {
            end,
            format: if matches.is_present("json") {
                Format::Json
            } else {
                Format::Table
            },
            charts,
            draw_walk: matches.is_present("walk"),
        })
    }
}

/// Write the listing to `out` and every requested chart to its file.
pub fn print_enumeration(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    match config.format {
        Format::Table => report::write_table(out, config.end)?,
        Format::Json => report::write_json_lines(out, config.end)?,
    }
    out.flush()?;

    for target in &config.charts {
        let file = File::create(&target.path)
            .with_context(|| format!("Failed to create {}", target.path.display()))?;
        let file = BufWriter::new(file);
        match target.kind {
            ChartKind::Svg => write_chart(SvgBackend::new(file), config),
            ChartKind::Tikz => write_chart(TikzBackend::new(file), config),
        }
        .with_context(|| format!("Failed to write {}", target.path.display()))?;
        tracing::info!("Wrote chart to {}", target.path.display());
    }
    Ok(())
}

fn write_chart<B: Backend<Error = std::io::Error>>(
    mut backend: B,
    config: &Config,
) -> std::io::Result<()> {
    report::plot(&mut backend, config.end, config.draw_walk)?;
    backend.finish()
}

#[cfg(test)]
mod tests {
    use clap::{App, Arg};

    use super::*;

    fn app() -> App<'static, 'static> {
        App::new("print")
            .arg(Arg::with_name("end").required(true).index(1))
            .arg(Arg::with_name("json").long("json"))
            .arg(Arg::with_name("walk").long("walk"))
            .arg(Arg::with_name("svg").long("svg").takes_value(true))
            .arg(Arg::with_name("tikz").long("tikz").takes_value(true))
    }

    #[test]
    fn config_from_args() {
        let matches = app().get_matches_from(["print", "40", "--json", "--svg", "out.svg"]);
        let config = Config::try_from(&matches).unwrap();
        assert_eq!(
            config,
            Config {
                end: 40,
                format: Format::Json,
                charts: vec![ChartTarget {
                    kind: ChartKind::Svg,
                    path: PathBuf::from("out.svg")
                }],
                draw_walk: false,
            }
        );
    }

    #[test]
    fn invalid_end() {
        let matches = app().get_matches_from(["print", "forty"]);
        assert!(Config::try_from(&matches).is_err());
    }

    #[test]
    fn writes_charts() {
        let dir = std::env::temp_dir().join(format!("cantor-utils-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let svg = dir.join("cantor.svg");
        let tex = dir.join("cantor.tex");

        let config = Config {
            end: 10,
            format: Format::Table,
            charts: vec![
                ChartTarget {
                    kind: ChartKind::Svg,
                    path: svg.clone(),
                },
                ChartTarget {
                    kind: ChartKind::Tikz,
                    path: tex.clone(),
                },
            ],
            draw_walk: true,
        };
        let mut out = Vec::new();
        print_enumeration(&config, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 10);
        let svg = std::fs::read_to_string(svg).unwrap();
        assert_eq!(svg.matches("<circle").count(), 10);
        assert!(svg.contains(r#"class="walk""#));
        assert!(svg.ends_with("</svg>\n"));
        let tex = std::fs::read_to_string(tex).unwrap();
        assert!(tex.ends_with("\\end{tikzpicture}\n"));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_device_is_an_error() {
        let config = Config {
            end: 10,
            format: Format::Table,
            charts: vec![ChartTarget {
                kind: ChartKind::Svg,
                path: PathBuf::from("/dev/full"),
            }],
            draw_walk: false,
        };
        let err = print_enumeration(&config, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("/dev/full"));
    }
}
