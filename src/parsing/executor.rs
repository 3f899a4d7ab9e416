//! Procedure tree interpreter
//!
//! Each scope (the top level, and every repetition of a group body) starts
//! with a fresh [`State`] and walks its procedures in order while both
//! procedures and input lines remain. Running out of input with procedures
//! still pending is an error; running out of procedures with input left over
//! is only an error at the top level, and only under
//! [`TrailingInput::Strict`].
//!
//! Every scope reads the compiled procedures by reference, so the same tree
//! can be run against any number of inputs.

use tracing::trace;

use super::input::InputLines;
use crate::error::ParseError;
use crate::grammar::Procedure;
use crate::options::{ParseOptions, TrailingInput};
use crate::state::{State, Value};

/// Run `procedures` against `input`, returning the bound names.
pub fn run(
    procedures: &[Procedure],
    input: &mut InputLines<'_>,
    options: ParseOptions,
) -> Result<State, ParseError> {
    let state = run_scope(procedures, input)?;

    if options.trailing_input == TrailingInput::Strict {
        if let Some(line_number) = input.peek_line_number() {
            return Err(ParseError::TrailingInput {
                line_number,
                remaining: input.remaining(),
            });
        }
    }

    Ok(state)
}

fn run_scope(procedures: &[Procedure], input: &mut InputLines<'_>) -> Result<State, ParseError> {
    let mut state = State::new();
    let mut executed = 0;

    while executed < procedures.len() && !input.is_exhausted() {
        apply(&procedures[executed], input, &mut state)?;
        executed += 1;
    }

    if executed < procedures.len() {
        return Err(ParseError::InsufficientInput {
            remaining: procedures.len() - executed,
        });
    }

    Ok(state)
}

fn apply(
    procedure: &Procedure,
    input: &mut InputLines<'_>,
    state: &mut State,
) -> Result<(), ParseError> {
    match procedure {
        Procedure::Fields { names } => {
            let (line_number, line) = input
                .next_line()
                .ok_or(ParseError::InsufficientInput { remaining: 1 })?;
            let values: Vec<&str> = line.split(' ').collect();

            if values.len() != names.len() {
                return Err(ParseError::FieldCountMismatch {
                    line_number,
                    expected: names.clone(),
                    actual: values.into_iter().map(str::to_string).collect(),
                });
            }

            trace!(line_number, fields = ?names, "line consumed");
            for (name, value) in names.iter().zip(values) {
                state.bind(name.as_str(), value);
            }
        }
        Procedure::Group {
            key,
            count_var,
            body,
        } => {
            let count = repetition_count(state, key, count_var)?;
            let mut items = Vec::new();

            for iteration in 0..count {
                trace!(group = %key, iteration, count, "group iteration");
                items.push(run_scope(body, input)?);
            }

            state.bind(key.as_str(), items);
        }
    }

    Ok(())
}

fn repetition_count(state: &State, key: &str, count_var: &str) -> Result<usize, ParseError> {
    let value = state
        .get(count_var)
        .ok_or_else(|| ParseError::UnboundCountVariable {
            key: key.to_string(),
            count_var: count_var.to_string(),
        })?;

    match value {
        Value::Scalar(raw) => raw.parse().map_err(|_| ParseError::InvalidCount {
            count_var: count_var.to_string(),
            value: raw.clone(),
        }),
        Value::List(items) => Err(ParseError::InvalidCount {
            count_var: count_var.to_string(),
            value: format!("<list of {}>", items.len()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{compile, grammar_lines, MAX_NESTING};

    fn parse(grammar: &str, input: &str) -> Result<State, ParseError> {
        parse_with(grammar, input, ParseOptions::default())
    }

    fn parse_with(grammar: &str, input: &str, options: ParseOptions) -> Result<State, ParseError> {
        let procedures = compile(&grammar_lines(grammar)).unwrap();
        run(&procedures, &mut InputLines::new(input), options)
    }

    fn scalars(pairs: &[(&str, &str)]) -> State {
        pairs.iter().map(|&(k, v)| (k, v)).collect()
    }

    #[test]
    fn test_fields_bind_in_order() {
        let state = parse("name age\n", "Alice 30\n").unwrap();
        assert_eq!(state, scalars(&[("name", "Alice"), ("age", "30")]));
    }

    #[test]
    fn test_group_repeats_body_count_times() {
        let state = parse("count\nrecords : count *[\nid\n]\n", "2\nA\nB\n").unwrap();

        let mut expected = scalars(&[("count", "2")]);
        expected.bind(
            "records",
            vec![scalars(&[("id", "A")]), scalars(&[("id", "B")])],
        );
        assert_eq!(state, expected);
    }

    #[test]
    fn test_nested_groups_use_their_own_scope_counts() {
        let grammar = "\
n
outer : n *[
    label m
    inner : m *[
        x y
    ]
]
";
        let input = "2\nfirst 1\n1 2\nsecond 2\n3 4\n5 6\n";
        let state = parse(grammar, input).unwrap();

        let outer = state.list("outer").unwrap();
        assert_eq!(outer.len(), 2);
        assert_eq!(outer[0].scalar("label"), Some("first"));
        assert_eq!(outer[0].list("inner").unwrap(), &[scalars(&[("x", "1"), ("y", "2")])]);
        assert_eq!(outer[1].scalar("label"), Some("second"));
        assert_eq!(
            outer[1].list("inner").unwrap(),
            &[
                scalars(&[("x", "3"), ("y", "4")]),
                scalars(&[("x", "5"), ("y", "6")])
            ]
        );
    }

    #[test]
    fn test_field_count_mismatch_reports_names_and_values() {
        let err = parse("name age\n", "Alice\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::FieldCountMismatch {
                line_number: 1,
                expected: vec!["name".to_string(), "age".to_string()],
                actual: vec!["Alice".to_string()],
            }
        );
    }

    #[test]
    fn test_values_split_on_single_spaces() {
        let err = parse("a b\n", "1  2\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::FieldCountMismatch { ref actual, .. } if actual.len() == 3
        ));
    }

    #[test]
    fn test_insufficient_input_after_consuming_available_lines() {
        let mut input = InputLines::new("only\n");
        let procedures = compile(&["a", "b", "c"]).unwrap();
        let err = run(&procedures, &mut input, ParseOptions::default()).unwrap_err();

        assert_eq!(err, ParseError::InsufficientInput { remaining: 2 });
        assert!(input.is_exhausted());
    }

    #[test]
    fn test_insufficient_input_inside_group() {
        let err = parse("count\nrecords : count *[\nid\n]\n", "3\nA\nB\n").unwrap_err();
        assert_eq!(err, ParseError::InsufficientInput { remaining: 1 });
    }

    #[test]
    fn test_pending_group_needs_a_line_even_with_zero_count() {
        let err = parse("count\nrecords : count *[\nid\n]\n", "0\n").unwrap_err();
        assert_eq!(err, ParseError::InsufficientInput { remaining: 1 });

        let state = parse("count\nrecords : count *[\nid\n]\ntail\n", "0\nend\n").unwrap();
        assert_eq!(state.list("records"), Some(&[][..]));
        assert_eq!(state.scalar("tail"), Some("end"));
    }

    #[test]
    fn test_unbound_count_variable() {
        let err = parse("records : count *[\nid\n]\n", "A\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnboundCountVariable {
                key: "records".to_string(),
                count_var: "count".to_string(),
            }
        );
    }

    #[test]
    fn test_count_variable_must_be_bound_in_the_same_scope() {
        let err = parse("n\nouter : n *[\ninner : n *[\nx\n]\n]\n", "1\na\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnboundCountVariable {
                key: "inner".to_string(),
                count_var: "n".to_string(),
            }
        );
    }

    #[test]
    fn test_runs_grammar_nested_to_the_limit() {
        let mut grammar = String::from("n\n");
        grammar.push_str(&"g : n *[\nn\n".repeat(MAX_NESTING));
        grammar.push_str("x\n");
        grammar.push_str(&"]\n".repeat(MAX_NESTING));
        let input = "1\n".repeat(MAX_NESTING + 1) + "leaf\n";

        let mut state = parse(&grammar, &input).unwrap();
        for _ in 0..MAX_NESTING {
            let items = state.list("g").unwrap();
            assert_eq!(items.len(), 1);
            state = items[0].clone();
        }
        assert_eq!(state.scalar("x"), Some("leaf"));
    }

    #[test]
    fn test_non_integer_count() {
        let err = parse("count\nrecords : count *[\nid\n]\n", "two\nA\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidCount {
                count_var: "count".to_string(),
                value: "two".to_string(),
            }
        );

        let err = parse("count\nrecords : count *[\nid\n]\n", "-1\nA\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidCount { .. }));
    }

    #[test]
    fn test_list_bound_count_is_invalid() {
        let grammar = "n\nxs : n *[\nx\n]\nys : xs *[\ny\n]\n";
        let err = parse(grammar, "1\na\nb\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidCount {
                count_var: "xs".to_string(),
                value: "<list of 1>".to_string(),
            }
        );
    }

    #[test]
    fn test_trailing_input_lenient_by_default() {
        let state = parse("name\n", "Alice\nextra\n").unwrap();
        assert_eq!(state, scalars(&[("name", "Alice")]));
    }

    #[test]
    fn test_trailing_input_rejected_when_strict() {
        let err = parse_with("name\n", "Alice\n\nextra\nmore\n", ParseOptions::strict()).unwrap_err();
        assert_eq!(
            err,
            ParseError::TrailingInput {
                line_number: 3,
                remaining: 2,
            }
        );
    }

    #[test]
    fn test_same_tree_runs_against_several_inputs() {
        let procedures = compile(&["name age"]).unwrap();
        let first = run(&procedures, &mut InputLines::new("Alice 30"), ParseOptions::default()).unwrap();
        let second = run(&procedures, &mut InputLines::new("Bob 41"), ParseOptions::default()).unwrap();

        assert_eq!(first.scalar("name"), Some("Alice"));
        assert_eq!(second.scalar("name"), Some("Bob"));
        assert_eq!(procedures, vec![Procedure::fields(["name", "age"])]);
    }
}
