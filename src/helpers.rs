/*
 * Helpers shared between solutions.
 * Example import from this file: `use advent_of_code_2018::helpers::parse;`.
 */

pub mod parse;
