use rand::seq::SliceRandom;
use tagcloud::{count_lines, select_top, SeparatorSet};

#[test]
fn line_order_does_not_change_counts_or_selection() {
    let seps = SeparatorSet::default();
    let mut lines: Vec<String> = (0..200)
        .map(|i| format!("word{} common, Word{}; tail-{}", i % 7, i % 3, i % 11))
        .collect();
    let baseline = count_lines(&lines, &seps);
    let baseline_top: Vec<(String, u64)> = select_top(&baseline, 5)
        .entries
        .iter()
        .map(|e| (e.word.to_string(), e.count))
        .collect();

    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        lines.shuffle(&mut rng);
        let map = count_lines(&lines, &seps);
        assert_eq!(map, baseline);
        let top: Vec<(String, u64)> = select_top(&map, 5)
            .entries
            .iter()
            .map(|e| (e.word.to_string(), e.count))
            .collect();
        assert_eq!(top, baseline_top);
    }
}
