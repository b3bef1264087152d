use honggfuzz::fuzz;
use tagcloud::{count_lines, select_top, tokens, SeparatorSet};

fn main() {
    let seps = SeparatorSet::default();
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                let joined: String = tokens(text, &seps).map(|t| t.text).collect();
                assert_eq!(joined, text);
                let map = count_lines(text.lines(), &seps);
                let sel = select_top(&map, 25);
                assert_eq!(sel.effective_count, map.len().min(25));
            }
        });
    }
}
