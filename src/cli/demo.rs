//! Built-in sample expressions

use crate::{Engine, Error, evaluate_with};

/// One expression per feature of the language.
pub const DEMO_EXPRESSIONS: &[&str] = &[
    "1+2*3 == 5",
    "(1+2) * 3 / 3.14 + 5 - 3",
    "1 == 2",
    "1!=2",
    "-11>=-5.6",
    "\"bob\" == \"jan\"",
    "1<2.2",
    "\"2022-11-21\" > \"2019-11-22 23:46:22\"",
    "1>=2",
    "1<=2",
    "[\"bob\",\"jack\"] ## \"bob\"",
    "[\"bob\",\"jack\"] ## \"ben\"",
    "[\"bob\",\"jack\"] !# \"bob\"",
    "[\"bob\",\"jack\"] !# \"jan\"",
    "[\"bob\",\"jack\"] !# [\"jan\"]",
    "[\"bob\",\"jack\"] ## [\"jan\"]",
    "1==1 && 1<2",
    "1==1 || 2==1",
    "1==3 || true == false",
    "true==false && 3==1",
];

/// Evaluate every demo expression with the given engine.
pub fn run_demo(engine: Engine) -> Vec<(&'static str, Result<String, Error>)> {
    DEMO_EXPRESSIONS
        .iter()
        .map(|&expression| {
            let result = evaluate_with(expression, engine).map(|value| value.to_string());
            (expression, result)
        })
        .collect()
}
