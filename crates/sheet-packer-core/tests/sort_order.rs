use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sheet_packer_core::prelude::*;

#[test]
fn items_sorted_by_longest_side_then_shortest() {
    let cfg = PackerConfig::default();
    let mut items = vec![
        Item::new("a", 2, 2),
        Item::new("b", 5, 1),
        Item::new("c", 3, 3),
        Item::new("d", 1, 5),
        Item::new("e", 4, 2),
    ];
    let mut packer = BspPacker::new(&cfg);
    packer.pack(&mut items);

    // longest side desc, shortest side desc, then taller first
    let keys: Vec<&str> = items.iter().map(|i| i.key).collect();
    assert_eq!(keys, vec!["d", "b", "e", "c", "a"]);
    assert!(items.iter().all(|i| i.fit().is_some()));
}

#[test]
fn key_breaks_ties_between_identical_sizes() {
    let cfg = PackerConfig::default();
    let forward = sheet_packer_core::pack_layout(vec![("a", 2, 2), ("b", 2, 2)], &cfg);
    let reversed = sheet_packer_core::pack_layout(vec![("b", 2, 2), ("a", 2, 2)], &cfg);

    for sheet in [&forward, &reversed] {
        let a = sheet
            .placements
            .iter()
            .find(|p| p.key == "a")
            .expect("a placed");
        let b = sheet
            .placements
            .iter()
            .find(|p| p.key == "b")
            .expect("b placed");
        assert_eq!(a.frame, Rect::new(0, 0, 2, 2));
        assert_eq!(b.frame, Rect::new(2, 0, 2, 2));
    }
}

#[test]
fn adjacent_sorted_pairs_are_non_increasing() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut items: Vec<Item<String>> = (0..100)
        .map(|i| {
            Item::new(
                format!("i{i:03}"),
                rng.gen_range(1..=32),
                rng.gen_range(1..=32),
            )
        })
        .collect();
    let mut packer = BspPacker::new(&PackerConfig::default());
    packer.pack(&mut items);

    // descending composite key: longest side, shortest side, height, width
    for pair in items.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let ka = (a.w.max(a.h), a.w.min(a.h), a.h, a.w);
        let kb = (b.w.max(b.h), b.w.min(b.h), b.h, b.w);
        assert!(ka >= kb, "sorted pair out of order: {ka:?} before {kb:?}");
    }
}

#[test]
fn sort_ranks_squares_above_thinner_items_of_same_longest_side() {
    // (6,6) and (6,1): same longest side, the square's shortest side wins.
    let cfg = PackerConfig::default();
    let mut items = vec![Item::new("thin", 6, 1), Item::new("square", 6, 6)];
    let mut packer = BspPacker::new(&cfg);
    packer.pack(&mut items);
    assert_eq!(items[0].key, "square");
    assert_eq!(items[1].key, "thin");
}
