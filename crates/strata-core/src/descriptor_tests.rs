use crate::test_utils::{Punct, Tok, numbers, words};
use crate::{Analysis, Cursor, Match, TokenDescriptor, TokenDescriptors};

fn names(list: &TokenDescriptors<Tok>) -> Vec<String> {
    list.iter().map(|d| d.name().to_string()).collect()
}

#[test]
fn push_insert_remove_keep_order() {
    let mut list: TokenDescriptors<Tok> = TokenDescriptors::new();
    list.push(words()).push(numbers());
    list.insert(0, Punct(',', Tok::Comma));
    list.insert(2, Punct('(', Tok::Open));

    assert_eq!(names(&list), ["comma", "word", "open", "number"]);

    let removed = list.remove(1);
    assert_eq!(removed.name(), "word");
    assert_eq!(names(&list), ["comma", "open", "number"]);
    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
}

#[test]
fn collect_and_extend_boxed() {
    let boxed: Vec<Box<dyn TokenDescriptor<Tok>>> = vec![Box::new(words()), Box::new(numbers())];
    let mut list: TokenDescriptors<Tok> = boxed.into_iter().collect();
    list.extend([Box::new(Punct(')', Tok::Close)) as Box<dyn TokenDescriptor<Tok>>]);

    assert_eq!(names(&list), ["word", "number", "close"]);
}

#[test]
fn closures_are_descriptors() {
    let bang = |cursor: Cursor<'_>| -> Match<Tok> {
        Ok((cursor.first() == Some('!')).then(|| Analysis::new(Tok::Comma, 1)))
    };
    let list = TokenDescriptors::new().with(bang);

    let descriptor = list.iter().next().unwrap();
    assert_eq!(
        descriptor.first(Cursor::start("!?")).unwrap(),
        Some(Analysis::new(Tok::Comma, 1))
    );
    assert_eq!(descriptor.first(Cursor::start("?")).unwrap(), None);
    assert!(descriptor.name().contains("closure"));
}

#[test]
fn empty_remainder_is_no_match() {
    assert_eq!(words().first(Cursor::new("abc", 3)).unwrap(), None);
    assert_eq!(Punct(',', Tok::Comma).first(Cursor::new(",", 1)).unwrap(), None);
}

#[test]
fn analysis_map_keeps_consumed() {
    let analysis = Analysis::new(2, 7).map(|n| n * 10);
    assert_eq!(analysis, Analysis::new(20, 7));
}
