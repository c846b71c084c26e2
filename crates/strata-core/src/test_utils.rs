//! Tiny grammar shared by the unit tests: words, numbers, commas, parens.

use crate::{
    Analysis, Branch, CollectionDescriptor, Cursor, Error, Match, Node, NodeDescriptor,
    NodeDescriptors, Parser, TokenDescriptor, TokenDescriptors, TokenSlice, Tokenizer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tok {
    Word(String),
    Num(String),
    Comma,
    Open,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    Word(String),
    Num(u64),
    Group(Box<Ast>),
    List(Vec<Ast>),
}

impl Node for Ast {
    fn collection(nodes: Vec<Self>) -> Self {
        Ast::List(nodes)
    }
}

pub fn word(text: &str) -> Tok {
    Tok::Word(text.to_string())
}

pub fn num(text: &str) -> Tok {
    Tok::Num(text.to_string())
}

/// Run of chars accepted by `class`.
pub struct Run {
    pub label: &'static str,
    pub class: fn(char) -> bool,
    pub make: fn(&str) -> Tok,
}

impl TokenDescriptor<Tok> for Run {
    fn first(&self, cursor: Cursor<'_>) -> Match<Tok> {
        let rest = cursor.remainder();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !(self.class)(c))
            .map_or(rest.len(), |(at, _)| at);
        if len == 0 {
            return Ok(None);
        }
        Ok(Some(Analysis::new((self.make)(&rest[..len]), len)))
    }

    fn name(&self) -> &str {
        self.label
    }
}

/// A single fixed character.
pub struct Punct(pub char, pub Tok);

impl TokenDescriptor<Tok> for Punct {
    fn first(&self, cursor: Cursor<'_>) -> Match<Tok> {
        Ok((cursor.first() == Some(self.0)).then(|| Analysis::new(self.1.clone(), 1)))
    }

    fn name(&self) -> &str {
        match self.1 {
            Tok::Comma => "comma",
            Tok::Open => "open",
            Tok::Close => "close",
            _ => "punct",
        }
    }
}

pub fn words() -> Run {
    Run {
        label: "word",
        class: char::is_alphabetic,
        make: |text| Tok::Word(text.to_string()),
    }
}

pub fn numbers() -> Run {
    Run {
        label: "number",
        class: |c| c.is_ascii_digit(),
        make: |text| Tok::Num(text.to_string()),
    }
}

pub fn token_descriptors() -> TokenDescriptors<Tok> {
    TokenDescriptors::new()
        .with(Punct(',', Tok::Comma))
        .with(Punct('(', Tok::Open))
        .with(Punct(')', Tok::Close))
        .with(numbers())
        .with(words())
}

pub fn tokenizer() -> Tokenizer<Tok> {
    Tokenizer::new(token_descriptors())
}

/// One word or number token.
pub struct Leaf;

impl NodeDescriptor<Tok, Ast> for Leaf {
    fn first<'t>(&self, tokens: TokenSlice<'t, Tok>, _: &mut Branch<'_, 't, Tok, Ast>) -> Match<Ast> {
        let node = match tokens.first() {
            Some(Tok::Word(text)) => Ast::Word(text.clone()),
            Some(Tok::Num(text)) => Ast::Num(
                text.parse()
                    .map_err(|err| Error::conversion(tokens.start(), text.as_str(), err))?,
            ),
            _ => return Ok(None),
        };
        Ok(Some(Analysis::new(node, 1)))
    }

    fn name(&self) -> &str {
        "leaf"
    }
}

/// `( … )` with balanced nesting; the inside goes through the branch.
pub struct Group;

impl NodeDescriptor<Tok, Ast> for Group {
    fn first<'t>(
        &self,
        tokens: TokenSlice<'t, Tok>,
        branch: &mut Branch<'_, 't, Tok, Ast>,
    ) -> Match<Ast> {
        if tokens.first() != Some(&Tok::Open) {
            return Ok(None);
        }
        let mut depth = 0usize;
        for (at, token) in tokens.iter().enumerate() {
            match token {
                Tok::Open => depth += 1,
                Tok::Close => {
                    depth -= 1;
                    if depth == 0 {
                        let inner = branch(tokens.slice(1..at))?;
                        return Ok(Some(Analysis::new(Ast::Group(Box::new(inner.value)), at + 1)));
                    }
                }
                _ => {}
            }
        }
        Ok(None)
    }

    fn name(&self) -> &str {
        "group"
    }
}

pub fn node_descriptors() -> NodeDescriptors<Tok, Ast> {
    NodeDescriptors::new()
        .with(CollectionDescriptor::separated_by(Tok::Comma))
        .with(Group)
        .with(Leaf)
}

pub fn parser() -> Parser<Tok, Ast> {
    Parser::new(node_descriptors())
}
