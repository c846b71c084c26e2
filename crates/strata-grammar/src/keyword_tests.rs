use strata_core::{Analysis, Cursor, TokenDescriptor, TokenDescriptors, Tokenizer};

use crate::{CharClass, GrammarError, KeywordDescriptor, RunDescriptor};

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Unless,
    Ident(String),
}

fn unless() -> KeywordDescriptor<Tok> {
    KeywordDescriptor::new("unless", Tok::Unless).unwrap()
}

fn identifiers() -> RunDescriptor<Tok> {
    RunDescriptor::new(CharClass::Identifier, |text| Tok::Ident(text.to_string()))
}

#[test]
fn empty_keyword_is_rejected() {
    let err = KeywordDescriptor::new("", Tok::Unless).unwrap_err();
    assert_eq!(err, GrammarError::EmptyKeyword);
    insta::assert_snapshot!(err, @"keyword must not be empty");
}

#[test]
fn matches_at_the_cursor() {
    assert_eq!(
        unless().first(Cursor::start("unless x")),
        Ok(Some(Analysis::new(Tok::Unless, 6)))
    );
    assert_eq!(unless().first(Cursor::start("x unless")), Ok(None));
    assert_eq!(unless().first(Cursor::start("unles")), Ok(None));
}

#[test]
fn prefix_of_a_longer_word() {
    let cursor = Cursor::start("unlessly");
    assert_eq!(
        unless().first(cursor),
        Ok(Some(Analysis::new(Tok::Unless, 6)))
    );
    assert_eq!(unless().whole_word().first(cursor), Ok(None));
    assert_eq!(
        unless().whole_word().first(Cursor::start("unless_")),
        Ok(None)
    );
    assert_eq!(
        unless().whole_word().first(Cursor::start("unless(")),
        Ok(Some(Analysis::new(Tok::Unless, 6)))
    );
}

#[test]
fn keyword_before_identifier() {
    let tokenizer = Tokenizer::new(
        TokenDescriptors::new()
            .with(unless().whole_word())
            .with(identifiers()),
    );
    assert_eq!(
        tokenizer.analyse("unless unlessly").unwrap(),
        [Tok::Unless, Tok::Ident("unlessly".to_string())]
    );
}

#[test]
fn identifier_before_keyword_shadows_it() {
    let tokenizer = Tokenizer::new(TokenDescriptors::new().with(identifiers()).with(unless()));
    assert_eq!(
        tokenizer.analyse("unless").unwrap(),
        [Tok::Ident("unless".to_string())]
    );
}

#[test]
fn named_after_the_keyword() {
    assert_eq!(unless().name(), "unless");
    assert_eq!(unless().keyword(), "unless");
}
