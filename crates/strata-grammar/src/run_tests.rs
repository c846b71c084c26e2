use strata_core::{Analysis, Cursor, Error, TokenDescriptor};

use crate::{CharClass, RunDescriptor};

fn run(class: CharClass, input: &str) -> Option<Analysis<String>> {
    RunDescriptor::new(class, str::to_string)
        .first(Cursor::start(input))
        .unwrap()
}

#[test]
fn longest_run() {
    assert_eq!(
        run(CharClass::Digit, "123abc"),
        Some(Analysis::new("123".to_string(), 3))
    );
    assert_eq!(
        run(CharClass::Letter, "abc"),
        Some(Analysis::new("abc".to_string(), 3))
    );
    assert_eq!(run(CharClass::Digit, "abc"), None);
    assert_eq!(run(CharClass::Digit, ""), None);
}

#[test]
fn classes() {
    assert!(CharClass::Digit.contains('7'));
    assert!(!CharClass::Digit.contains('٧'));
    assert!(CharClass::Letter.contains('é'));
    assert!(!CharClass::Letter.contains('1'));
    assert!(CharClass::Alphanumeric.contains('1'));
    assert!(!CharClass::Alphanumeric.contains('_'));
    assert!(CharClass::Identifier.contains('_'));
    assert!(CharClass::Custom(|c| c == '#').contains('#'));
}

#[test]
fn multibyte_letters() {
    assert_eq!(
        run(CharClass::Letter, "héllo!"),
        Some(Analysis::new("héllo".to_string(), 6))
    );
}

#[test]
fn distinct_head_class() {
    let identifiers = RunDescriptor::new(CharClass::Identifier, str::to_string)
        .with_head(CharClass::Letter);

    assert_eq!(
        identifiers.first(Cursor::start("a_1 b")),
        Ok(Some(Analysis::new("a_1".to_string(), 3)))
    );
    assert_eq!(identifiers.first(Cursor::start("1ab")), Ok(None));
    assert_eq!(identifiers.first(Cursor::start("_ab")), Ok(None));
}

#[test]
fn custom_class() {
    assert_eq!(
        run(CharClass::Custom(|c| c == '#'), "### x"),
        Some(Analysis::new("###".to_string(), 3))
    );
}

#[test]
fn failed_conversion() {
    let numbers = RunDescriptor::fallible(CharClass::Digit, str::parse::<u64>);
    let err = numbers
        .first(Cursor::new("x 18446744073709551616", 2))
        .unwrap_err();
    assert_eq!(
        err,
        Error::ValueConversion {
            position: 2,
            text: "18446744073709551616".to_string(),
            reason: "number too large to fit in target type".to_string(),
        }
    );
}

#[test]
fn labels() {
    let name = |class| RunDescriptor::new(class, str::to_string).name().to_string();
    assert_eq!(name(CharClass::Digit), "digits");
    assert_eq!(name(CharClass::Identifier), "identifier");
    assert_eq!(
        RunDescriptor::new(CharClass::Letter, str::to_string)
            .labelled("name")
            .name(),
        "name"
    );
}
