use crate::*;

use std::io::Cursor;

use clap::Parser;
use distinct_count::{Query, Solver, TableKind};

const SAMPLE: &str = "5
1 1 2 1 3
3
1 5
2 4
3 5
";

fn parse(input: &str) -> Result<Problem, ParseError> {
    Problem::parse(input.as_bytes(), &Limits::default())
}

fn run(argv: &[&str], input: &str) -> anyhow::Result<String> {
    let args = cli::Args::try_parse_from(argv)?;
    let mut out = Vec::new();
    cli::run(&args, input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn tokens_skip_any_ascii_whitespace() {
    let mut t = Tokens::new(b" 12\r\n\t7  0\n");
    assert_eq!(t.next_u64("a").unwrap(), 12);
    assert_eq!(t.next_u64("b").unwrap(), 7);
    assert_eq!(t.next_u64("c").unwrap(), 0);
    assert!(matches!(
        t.clone().next_u64("d"),
        Err(ParseError::UnexpectedEnd { expected: "d" })
    ));
    t.finish().unwrap();
}

#[test]
fn tokens_reject_signs_and_overflow() {
    let mut t = Tokens::new(b"3 -4");
    assert_eq!(t.next_u64("a").unwrap(), 3);
    assert!(matches!(
        t.next_u64("b"),
        Err(ParseError::InvalidByte {
            offset: 2,
            byte: b'-'
        })
    ));

    let mut t = Tokens::new(b"  99999999999999999999");
    assert!(matches!(
        t.next_u64("a"),
        Err(ParseError::Overflow { offset: 2 })
    ));

    let mut t = Tokens::new(b"18446744073709551615");
    assert_eq!(t.next_u64("a").unwrap(), u64::MAX);
}

#[test]
fn parses_sample_into_zero_based_queries() {
    let problem = parse(SAMPLE).unwrap();
    assert_eq!(problem.values, vec![1, 1, 2, 1, 3]);
    assert_eq!(
        problem.queries,
        vec![
            Query::new(0, 4, 0),
            Query::new(1, 3, 1),
            Query::new(2, 4, 2),
        ]
    );
}

#[test]
fn sample_answers_match_in_both_modes() {
    let problem = parse(SAMPLE).unwrap();
    let fast = problem.solve(&Solver::default()).unwrap();
    assert_eq!(fast, vec![3, 2, 3]);
    assert_eq!(problem.solve_naive().unwrap(), fast);
    assert_eq!(format_answers(&fast), "3\n2\n3\n");
}

#[test]
fn write_answers_uses_plain_newlines() {
    let mut out = Vec::new();
    write_answers(&mut out, &[4, 0, 12]).unwrap();
    assert_eq!(out, b"4\n0\n12\n");

    let mut out = Vec::new();
    write_answers(&mut out, &[]).unwrap();
    assert!(out.is_empty());
}

#[test]
fn read_from_reads_the_whole_stream() {
    let problem = Problem::read_from(Cursor::new(SAMPLE), &Limits::default()).unwrap();
    assert_eq!(problem.queries.len(), 3);
}

#[test]
fn zero_queries_is_a_valid_problem() {
    let problem = parse("2\n1 2\n0\n").unwrap();
    assert!(problem.queries.is_empty());
    assert!(problem.solve(&Solver::default()).unwrap().is_empty());
}

#[test]
fn truncated_input_names_the_missing_token() {
    let cases = [
        ("", "array length"),
        ("3\n1 2", "array value"),
        ("3\n1 2 3\n", "query count"),
        ("3\n1 2 3\n1\n", "query start"),
        ("3\n1 2 3\n1\n2", "query end"),
    ];
    for (input, missing) in cases {
        match parse(input) {
            Err(ParseError::UnexpectedEnd { expected }) => assert_eq!(expected, missing),
            other => panic!("{input:?}: unexpected {other:?}"),
        }
    }
}

#[test]
fn trailing_tokens_are_rejected() {
    let input = format!("{SAMPLE}4 5\n");
    assert!(matches!(
        parse(&input),
        Err(ParseError::TrailingInput { offset }) if offset == SAMPLE.len()
    ));
}

#[test]
fn limits_are_enforced_while_parsing() {
    let limits = Limits {
        max_len: 3,
        max_value: 10,
        max_queries: 1,
    };
    let reject = |input: &str| Problem::parse(input.as_bytes(), &limits).unwrap_err();

    assert!(matches!(
        reject("4\n1 2 3 4\n0\n"),
        ParseError::LimitExceeded {
            what: "array length",
            value: 4,
            limit: 3
        }
    ));
    assert!(matches!(
        reject("2\n1 11\n0\n"),
        ParseError::LimitExceeded {
            what: "array value",
            value: 11,
            limit: 10
        }
    ));
    assert!(matches!(
        reject("2\n1 10\n2\n1 1\n2 2\n"),
        ParseError::LimitExceeded {
            what: "query count",
            value: 2,
            limit: 1
        }
    ));
    assert!(Problem::parse(b"2\n1 10\n1\n1 2\n", &limits).is_ok());
}

#[test]
fn bad_ranges_are_reported_one_based() {
    let cases = [("0 2", 0, 2), ("3 2", 3, 2), ("2 4", 2, 4)];
    for (range, s, e) in cases {
        let input = format!("3\n1 2 3\n2\n1 1\n{range}\n");
        match parse(&input) {
            Err(ParseError::BadRange {
                query,
                start,
                end,
                len,
            }) => {
                assert_eq!((query, start, end, len), (2, s, e, 3));
            }
            other => panic!("{range}: unexpected {other:?}"),
        }
    }
}

#[test]
fn default_limits_map_to_an_inclusive_value_domain() {
    let options = Limits::default().solver_options();
    assert_eq!(options.value_limit, Some(1_000_001));
    assert_eq!(options.max_len, Some(30_000));

    // The largest accepted value must also be accepted by the solver.
    let problem = parse("2\n1000000 1000000\n1\n1 2\n").unwrap();
    let solver = Solver::new(options).unwrap();
    assert_eq!(problem.solve(&solver).unwrap(), vec![1]);

    let options = Limits::unlimited().solver_options();
    assert_eq!(options.value_limit, None);
    assert_eq!(options.max_len, None);
}

#[test]
fn cli_answers_the_sample() {
    assert_eq!(run(&["dquery"], SAMPLE).unwrap(), "3\n2\n3\n");
    assert_eq!(run(&["dquery", "--naive"], SAMPLE).unwrap(), "3\n2\n3\n");
    assert_eq!(
        run(&["dquery", "--table", "sparse"], SAMPLE).unwrap(),
        "3\n2\n3\n"
    );
}

#[test]
fn cli_options_reach_the_solver() {
    let args = cli::Args::try_parse_from(["dquery", "--table", "dense", "--value-limit", "8"])
        .unwrap();
    let solver = args.solver().unwrap();
    assert_eq!(solver.options().table, TableKind::Dense);
    assert_eq!(solver.options().value_limit, Some(8));

    // A value limit below the input limit turns large values into solver errors.
    let err = run(&["dquery", "--value-limit", "3"], SAMPLE).unwrap_err();
    assert!(format!("{err:#}").contains("outside the value domain"));
}

#[test]
fn cli_unlimited_accepts_wide_values() {
    let input = "3\n4000000000 5 4000000000\n1\n1 3\n";
    assert!(run(&["dquery"], input).is_err());
    assert_eq!(run(&["dquery", "--unlimited"], input).unwrap(), "2\n");
}

#[test]
fn cli_max_len_overrides_the_default_limit() {
    let err = run(&["dquery", "--max-len", "4"], SAMPLE).unwrap_err();
    assert!(format!("{err:#}").contains("array length is 5, above the limit of 4"));
}

#[test]
fn cli_rejects_an_unknown_table() {
    assert!(cli::Args::try_parse_from(["dquery", "--table", "tree"]).is_err());
}
