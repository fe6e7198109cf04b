use super::*;

fn fixed(width: usize) -> LineFormatter {
    LineFormatter::with_width(width)
}

fn lines(width: usize, paragraph: &str) -> Vec<String> {
    fixed(width).reflow(paragraph)
}

#[test]
fn test_default_is_raw() {
    let formatter = LineFormatter::new();
    assert!(formatter.is_raw());
    assert_eq!(formatter.width(), 0);
    assert_eq!(formatter, LineFormatter::default());
}

#[test]
fn test_set_width_and_raw() {
    let mut formatter = LineFormatter::new();
    assert!(formatter.set_width(20).is_success());
    assert_eq!(formatter.width(), 20);
    assert!(!formatter.is_raw());
    formatter.set_raw();
    assert!(formatter.is_raw());
    assert!(formatter.set_width(0).is_success());
    assert!(formatter.is_raw());
}

#[test]
fn test_negative_width_keeps_previous_value() {
    let mut formatter = fixed(12);
    assert_eq!(
        formatter.set_width(-3),
        CmdResult::Failure(CmdFailure::InvalidArgument)
    );
    assert_eq!(formatter.width(), 12);
}

#[test]
fn test_raw_render_numbers_paragraphs() {
    let document = Document::from_paragraphs(["first  paragraph ", "", "third"]);
    let rendering = LineFormatter::new().render(&document);
    assert_eq!(
        rendering,
        Rendering::Raw(vec![
            NumberedParagraph { number: 1, text: "first  paragraph " },
            NumberedParagraph { number: 2, text: "" },
            NumberedParagraph { number: 3, text: "third" },
        ])
    );
}

#[test]
fn test_raw_render_of_empty_document() {
    let document = Document::new();
    assert_eq!(LineFormatter::new().render(&document), Rendering::Raw(vec![]));
    assert_eq!(fixed(10).render(&document), Rendering::Fixed(vec![]));
}

#[test]
fn test_raw_reflow_returns_paragraph() {
    assert_eq!(LineFormatter::new().reflow("a  b"), ["a  b"]);
}

#[test]
fn test_short_paragraph_fits_on_one_line() {
    assert_eq!(lines(20, "Red and Blue"), ["Red and Blue"]);
}

#[test]
fn test_greedy_packing() {
    assert_eq!(
        lines(10, "the quick brown fox jumps over the lazy dog"),
        ["the quick", "brown fox", "jumps over", "the lazy", "dog"]
    );
}

#[test]
fn test_line_exactly_at_width() {
    assert_eq!(lines(9, "abcd efgh ij"), ["abcd efgh", "ij"]);
}

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(lines(10, "  a \t b   c  "), ["a b c"]);
}

#[test]
fn test_empty_paragraph_gives_one_empty_line() {
    assert_eq!(lines(10, ""), [""]);
    assert_eq!(lines(10, "   "), [""]);
}

#[test]
fn test_long_word_is_split_into_chunks() {
    let word = "abcdefghijklmnopqrstuvwxy";
    assert_eq!(word.len(), 25);
    assert_eq!(lines(10, word), ["abcdefghij", "klmnopqrst", "uvwxy"]);
}

#[test]
fn test_long_word_closes_current_line_first() {
    assert_eq!(
        lines(5, "ab cdefghijkl mn"),
        ["ab", "cdefg", "hijkl", "mn"]
    );
}

#[test]
fn test_split_remainder_keeps_packing() {
    assert_eq!(
        lines(5, "abcdefg hi jk"),
        ["abcde", "fg hi", "jk"]
    );
}

#[test]
fn test_split_remainder_equal_to_width_is_not_split_again() {
    assert_eq!(lines(4, "abcdefgh ij"), ["abcd", "efgh", "ij"]);
    assert_eq!(lines(4, "abcdefgh"), ["abcd", "efgh"]);
}

#[test]
fn test_word_equal_to_width_is_not_split() {
    assert_eq!(lines(5, "abcde"), ["abcde"]);
    assert_eq!(lines(5, "x abcde"), ["x", "abcde"]);
}

#[test]
fn test_width_one() {
    assert_eq!(lines(1, "ab c"), ["a", "b", "c"]);
}

#[test]
fn test_umlauts_count_as_one_character() {
    assert_eq!(lines(5, "äöüäöüÄ"), ["äöüäö", "üÄ"]);
    assert_eq!(lines(7, "Öl für"), ["Öl für"]);
}

#[test]
fn test_fixed_render_concatenates_paragraphs() {
    let document = Document::from_paragraphs(["one two three", "", "four"]);
    assert_eq!(
        fixed(7).render(&document),
        Rendering::Fixed(vec![
            "one two".to_string(),
            "three".to_string(),
            String::new(),
            "four".to_string(),
        ])
    );
}

#[test]
fn test_reflow_preserves_words_and_respects_width() {
    let paragraph = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
        eiusmod tempor incididunt ut labore et dolore magna aliqua";
    let original: Vec<&str> = paragraph.split_whitespace().collect();
    for width in 11..40 {
        let result = lines(width, paragraph);
        assert!(result.iter().all(|line| line.chars().count() <= width));
        let words: Vec<&str> = result.iter().flat_map(|l| l.split_whitespace()).collect();
        assert_eq!(words, original, "width {}", width);
    }
}

#[test]
fn test_forced_splits_preserve_every_character_in_order() {
    let paragraph = "Donaudampfschifffahrt is long, Röntgenstrahlen too; ok";
    let original: String = paragraph.split_whitespace().collect();
    for width in 1..8 {
        let result = lines(width, paragraph);
        assert!(
            result.iter().all(|line| line.chars().count() <= width),
            "width {}: {:?}",
            width,
            result
        );
        let rejoined: String = result.iter().flat_map(|l| l.split_whitespace()).collect();
        assert_eq!(rejoined, original, "width {}", width);
    }
}

#[test]
fn test_split_at_char() {
    assert_eq!(split_at_char("hello", 2), ("he", "llo"));
    assert_eq!(split_at_char("hi", 5), ("hi", ""));
    assert_eq!(split_at_char("äbc", 1), ("ä", "bc"));
}
