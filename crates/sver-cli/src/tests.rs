use clap::{CommandFactory, Parser};

use super::*;

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn compare_arguments() {
    let cli = Cli::try_parse_from(["sver", "compare", "1.0.0", ">=", "1.0.0-rc.1"]).unwrap();
    let Commands::Compare(args) = cli.command else {
        panic!("expected `compare`");
    };
    assert_eq!(args.left, "1.0.0");
    assert_eq!(args.operator, Operator::GreaterThanEqual);
    assert_eq!(args.right, "1.0.0-rc.1");
    assert_eq!(ComparisonMode::from(args.mode), ComparisonMode::Precedence);
    assert!(!args.invert);
    assert_eq!(cli.global_args.output_format, OutputFormat::Text);
}

#[test]
fn compare_mode_and_invert() {
    let cli = Cli::try_parse_from([
        "sver",
        "compare",
        "--mode",
        "strict-equality",
        "--invert",
        "1.0.0+a",
        "eq",
        "1.0.0+b",
        "--output-format",
        "json",
    ])
    .unwrap();
    let Commands::Compare(args) = cli.command else {
        panic!("expected `compare`");
    };
    assert_eq!(args.operator, Operator::Equal);
    assert_eq!(
        ComparisonMode::from(args.mode),
        ComparisonMode::StrictEquality
    );
    assert!(args.invert);
    assert_eq!(cli.global_args.output_format, OutputFormat::Json);
}

#[test]
fn unknown_operator_is_rejected() {
    let err = Cli::try_parse_from(["sver", "compare", "1.0.0", "~>", "1.0.1"])
        .err()
        .unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["sver", "-q", "-v", "parse", "1.0.0"]).is_err());

    let cli = Cli::try_parse_from(["sver", "parse", "-vv", "1.0.0"]).unwrap();
    assert_eq!(cli.global_args.verbose, 2);
    assert!(matches!(cli.command, Commands::Parse(ParseArgs { ref input }) if input == "1.0.0"));
}
