use chart::{Backend, TikzBackend};
use expect_test::expect;

use cantor::report::{plot, write_table};

#[test]
fn table() {
    let mut out = Vec::new();
    write_table(&mut out, 12).unwrap();

    expect![[r#"
        1 :        1 / 1
        2 :        2 / 1
        3 :        1 / 2
        4 :        1 / 3
        5 :        3 / 1
        6 :        4 / 1
        7 :        3 / 2
        8 :        2 / 3
        9 :        1 / 4
        10:        1 / 5
        11:        5 / 1
        12:        6 / 1
    "#]]
    .assert_eq(std::str::from_utf8(&out).unwrap());
}

#[test]
fn tikz_chart() {
    let mut out = Vec::new();
    let mut backend = TikzBackend::new(&mut out);
    plot(&mut backend, 4, true).unwrap();
    backend.finish().unwrap();

    expect![[r#"
        \begin{tikzpicture}[
          major-grid/.style={ opacity = 0.2 },
          grid/.style={ opacity = 0.1 },
          walk/.style={ opacity = 0.4 },
        ]
        \draw [major-grid] (0, 0) -- (0, 3);
        \draw [major-grid] (0, 0) -- (3, 0);
        \node [below] at (0, 0) {0};
        \node [left] at (0, 0) {0};
        \draw [grid] (1, 0) -- (1, 3);
        \draw [grid] (0, 1) -- (3, 1);
        \draw [grid] (2, 0) -- (2, 3);
        \draw [grid] (0, 2) -- (3, 2);
        \draw [grid] (3, 0) -- (3, 3);
        \draw [grid] (0, 3) -- (3, 3);
        \draw [walk] (1, 1) -- (2, 1);
        \draw [walk] (2, 1) -- (1, 2);
        \draw [walk] (1, 2) -- (1, 3);
        \draw [fill] (1, 1) circle (0.1);
        \draw [fill] (2, 1) circle (0.1);
        \draw [fill] (1, 2) circle (0.1);
        \draw [fill] (1, 3) circle (0.1);
        \end{tikzpicture}
    "#]]
    .assert_eq(std::str::from_utf8(&out).unwrap());
}
