use std::io::Cursor;

use tagcloud::{build_cloud, Config, MAX_FONT, MIN_FONT};

fn config(n: usize) -> Config {
    Config {
        requested_count: n,
        ..Config::default()
    }
}

#[test]
fn top_three_with_tie_at_boundary() {
    let text = "the cat sat on the mat. The cat ran.";
    let cloud = build_cloud(Cursor::new(text), "story.txt", &config(3)).unwrap();
    assert_eq!(cloud.effective_count, 3);
    let words: Vec<_> = cloud.entries.iter().map(|e| e.word.as_str()).collect();
    // count-1 ties resolve alphabetically: mat < on < ran < sat
    assert_eq!(words, vec!["cat", "mat", "the"]);
    let counts: Vec<_> = cloud.entries.iter().map(|e| e.count).collect();
    assert_eq!(counts, vec![2, 1, 3]);
    let fonts: Vec<_> = cloud.entries.iter().map(|e| e.font_size).collect();
    // 2*37/3 = 24, 1*37/3 = 12
    assert_eq!(fonts, vec![35, 23, MAX_FONT]);
}

#[test]
fn request_exceeds_distinct_words() {
    let text = "the cat sat on the mat. The cat ran.";
    let cloud = build_cloud(Cursor::new(text), "story.txt", &config(100)).unwrap();
    assert_eq!(cloud.requested_count, 100);
    assert_eq!(cloud.effective_count, 6);
    assert_eq!(cloud.entries.len(), 6);
    assert_eq!(cloud.title(), "Top 100 words in story.txt");
    assert_eq!(cloud.heading(), "Top 6 words in story.txt");
}

#[test]
fn empty_input() {
    let cloud = build_cloud(Cursor::new(""), "empty.txt", &config(10)).unwrap();
    assert_eq!(cloud.effective_count, 0);
    assert!(cloud.entries.is_empty());
    assert_eq!(cloud.heading(), "Top 0 words in empty.txt");
}

#[test]
fn single_repeated_word() {
    let text = "echo Echo ECHO\necho, echo!";
    let cloud = build_cloud(Cursor::new(text), "echo.txt", &config(1)).unwrap();
    assert_eq!(cloud.effective_count, 1);
    assert_eq!(cloud.entries.len(), 1);
    assert_eq!(cloud.entries[0].word, "echo");
    assert_eq!(cloud.entries[0].count, 5);
    assert_eq!(cloud.entries[0].font_size, MAX_FONT);
}

#[test]
fn all_equal_counts_get_max_font() {
    let cloud = build_cloud(Cursor::new("a b c d"), "flat.txt", &config(4)).unwrap();
    assert!(cloud.entries.iter().all(|e| e.font_size == MAX_FONT));
    assert!(cloud.entries.iter().all(|e| e.font_size > MIN_FONT));
}
