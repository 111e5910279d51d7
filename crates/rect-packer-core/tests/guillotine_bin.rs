use rect_packer_core::model::Rect;
use rect_packer_core::packer::guillotine::GuillotineBin;
use rect_packer_core::packer::{Bin, bin_pack};

#[test]
fn guillotine_scores_leftover_area() {
    let bin: GuillotineBin<()> = GuillotineBin::new(16, 12);
    assert_eq!((bin.width(), bin.height()), (16, 12));
    assert_eq!(bin.score(8, 14), None);
    assert_eq!(bin.score(14, 8), Some(16 * 12 - 14 * 8));
    assert_eq!(bin.score(16, 12), Some(0));
}

#[test]
fn guillotine_places_at_free_rect_origin() {
    let mut bin = GuillotineBin::new(10, 10);
    let r = bin.add("a", 6, 6, false).expect("fits");
    assert_eq!(r, Rect::new(0, 0, 6, 6));
    // tie on the larger piece goes to the vertical cut
    assert_eq!(
        bin.free_rects(),
        &[Rect::new(0, 6, 6, 4), Rect::new(6, 0, 4, 10)]
    );

    // 4x10 matches the right column exactly
    assert_eq!(bin.score(4, 10), Some(0));
    let r = bin.add("b", 4, 10, false).expect("fits");
    assert_eq!(r, Rect::new(6, 0, 4, 10));
    assert_eq!(bin.free_rects(), &[Rect::new(0, 6, 6, 4)]);

    let r = bin.add("c", 3, 3, true).expect("fits");
    assert_eq!(r, Rect::new(0, 6, 3, 3));

    let placed: Vec<(&str, u32, u32, bool)> = bin
        .rectangles()
        .iter()
        .map(|p| (p.item, p.x, p.y, p.rotated))
        .collect();
    assert_eq!(
        placed,
        vec![("a", 0, 0, false), ("b", 6, 0, false), ("c", 0, 6, true)]
    );
}

#[test]
fn guillotine_add_hands_item_back_when_full() {
    let mut bin = GuillotineBin::new(4, 4);
    bin.add(1, 4, 4, false).expect("fits");
    assert_eq!(bin.add(2, 1, 1, false), Err(2));
    assert_eq!(bin.rectangles().len(), 1);
}

#[test]
fn guillotine_prefers_tightest_pocket_over_list_order() {
    let mut bin = GuillotineBin::new(10, 10);
    bin.add((), 5, 5, false).expect("fits");
    assert_eq!(
        bin.free_rects(),
        &[Rect::new(0, 5, 5, 5), Rect::new(5, 0, 5, 10)]
    );
    // 5x10 only fits the right column; 5x5 fits both but the 5x5 pocket is exact
    assert_eq!(bin.score(5, 10), Some(0));
    assert_eq!(bin.score(5, 5), Some(0));
    assert_eq!(bin.score(4, 4), Some(25 - 16));
    let r = bin.add((), 4, 4, false).expect("fits");
    assert_eq!((r.x, r.y), (0, 5));
}

#[test]
fn guillotine_earlier_free_rect_wins_equal_leftover() {
    let mut bin = GuillotineBin::new(12, 10);
    bin.add((), 6, 5, false).expect("fits");
    bin.add((), 3, 10, false).expect("fits");
    // two distinct 30-area pockets: 6x5 below the first placement, 3x10 on the right
    assert_eq!(
        bin.free_rects(),
        &[Rect::new(0, 5, 6, 5), Rect::new(9, 0, 3, 10)]
    );
    assert_eq!(bin.score(3, 5), Some(15));
    let r = bin.add((), 3, 5, false).expect("fits");
    assert_eq!((r.x, r.y), (0, 5));
    // size is unchanged by placements
    assert_eq!((bin.width(), bin.height()), (12, 10));
}

#[test]
fn bin_pack_accepts_custom_bin_factory() {
    let mut opened = 0;
    let bins = bin_pack(vec![(8u32, 8u32), (8, 8), (8, 8)], || {
        opened += 1;
        GuillotineBin::new(8, 16)
    });
    assert_eq!(opened, 2);
    assert_eq!(bins.len(), 2);
    assert_eq!(bins[0].rectangles().len(), 2);
    assert_eq!(bins[1].rectangles().len(), 1);
    assert_eq!(
        (bins[0].rectangles()[1].x, bins[0].rectangles()[1].y),
        (0, 8)
    );
}
