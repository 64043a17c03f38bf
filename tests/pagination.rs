// tests/pagination.rs
use offerings_browser::filter::{apply, FilterCriteria};
use offerings_browser::model::{Dataset, Offering};
use offerings_browser::pager::Pager;

fn dataset(n: usize) -> Dataset {
    Dataset::new((0..n).map(|i| Offering::default().with_name(format!("p{i}"))).collect())
}

#[test]
fn load_more_walks_pages_to_the_end() {
    for len in [0usize, 1, 49, 50, 51, 120, 150] {
        let ds = dataset(len);
        let view = apply(&ds, &FilterCriteria::default());
        let mut pager = Pager::new(50);
        pager.reset(&view);

        let mut sizes = Vec::new();
        let mut total = 0;
        while pager.has_more() {
            let got = pager.load_more().len();
            assert_eq!(got, 50usize.min(len - total), "len={len}");
            total += got;
            sizes.push(got);
            assert!(pager.cursor() <= pager.len());
        }
        assert_eq!(total, len, "len={len}");
        assert_eq!(sizes.len(), len.div_ceil(50), "len={len}");
        assert!(pager.load_more().is_empty(), "no-op at the end");
        assert_eq!(pager.cursor(), len);
    }
}

#[test]
fn has_more_is_false_only_after_the_final_page() {
    let ds = dataset(120);
    let view = apply(&ds, &FilterCriteria::default());
    let mut pager = Pager::new(50);
    pager.reset(&view);

    assert_eq!(pager.load_more(), 0..50);
    assert!(pager.has_more());
    assert_eq!(pager.load_more(), 50..100);
    assert!(pager.has_more());
    assert_eq!(pager.load_more(), 100..120);
    assert!(!pager.has_more());
}

#[test]
fn indicators_follow_view_state() {
    let ds = dataset(60);
    let mut pager = Pager::new(50);

    pager.reset(&apply(&ds, &FilterCriteria::default().with_query("nothing")));
    let ind = pager.indicators();
    assert!(ind.no_results);
    assert!(!ind.loading);

    pager.reset(&apply(&ds, &FilterCriteria::default()));
    pager.load_more();
    assert!(pager.indicators().loading);
    pager.load_more();
    let ind = pager.indicators();
    assert!(!ind.loading);
    assert!(!ind.no_results);
}

#[test]
fn reset_rewinds_the_cursor() {
    let ds = dataset(80);
    let view = apply(&ds, &FilterCriteria::default());
    let mut pager = Pager::new(50);
    pager.reset(&view);
    pager.load_more();
    pager.load_more();
    assert_eq!(pager.cursor(), 80);

    pager.reset(&view);
    assert_eq!(pager.cursor(), 0);
    assert!(pager.visible().is_empty());
}
