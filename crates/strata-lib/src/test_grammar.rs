//! Bracketed-list grammar used by the end-to-end tests.

use crate::grammar::{
    CharClass, CharDescriptor, KeywordDescriptor, LeafDescriptor, PatternDescriptor,
    QuotedDescriptor, RunDescriptor,
};
use crate::{
    CollectionDescriptor, Error, Node, NodeDescriptors, Parser, TokenDescriptors, Tokenizer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    ParenOpen,
    ParenClose,
    BracketOpen,
    BracketClose,
    Comma,
    Unless,
    Number(String),
    Name(String),
    Str(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Unless,
    Number(u64),
    Name(String),
    Str(String),
    List(Vec<Value>),
}

impl Node for Value {
    fn collection(nodes: Vec<Self>) -> Self {
        Value::List(nodes)
    }
}

pub fn name(text: &str) -> Value {
    Value::Name(text.to_string())
}

pub fn tokenizer() -> Tokenizer<Token> {
    let punctuation = CharDescriptor::new([
        ('(', Token::ParenOpen),
        (')', Token::ParenClose),
        ('[', Token::BracketOpen),
        (']', Token::BracketClose),
        (',', Token::Comma),
    ])
    .labelled("punct");

    let unless = KeywordDescriptor::new("unless", Token::Unless)
        .map(KeywordDescriptor::whole_word);
    let names = PatternDescriptor::new("[a-zA-Z_$][a-zA-Z_$0-9]*", |text| {
        Token::Name(text.to_string())
    })
    .map(|names| names.labelled("name"));

    let mut descriptors = TokenDescriptors::new();
    descriptors
        .push(punctuation)
        .push(RunDescriptor::new(CharClass::Digit, |text| Token::Number(text.to_string())))
        .push(unless.unwrap())
        .push(names.unwrap())
        .push(QuotedDescriptor::double_quoted(|text| Token::Str(text.to_string())));
    Tokenizer::new(descriptors)
}

pub fn parser() -> Parser<Token, Value> {
    let leaves = LeafDescriptor::new(|token: &Token, index: usize| {
        Ok(Some(match token {
            Token::Unless => Value::Unless,
            Token::Number(text) => Value::Number(
                text.parse()
                    .map_err(|err| Error::conversion(index, text.as_str(), err))?,
            ),
            Token::Name(text) => Value::Name(text.clone()),
            Token::Str(text) => Value::Str(text.clone()),
            _ => return Ok(None),
        }))
    });

    Parser::new(
        NodeDescriptors::new()
            .with(CollectionDescriptor::separated_by(Token::Comma))
            .with(leaves),
    )
}
