// tests/segmentation.rs
//
// Homograph ranges over generated pages: k headings, each followed by its
// own grammar blocks.

use lexi_scrape::core::Markup;
use lexi_scrape::specs::{segment::segment, Grammar, HomographRange};
use lexi_scrape::extract_from_markup;
use rstest::rstest;

fn page(blocks_per_heading: &[usize]) -> String {
    let mut html = String::from(r#"<div class="entryWrapper">"#);
    for (h, &n) in blocks_per_heading.iter().enumerate() {
        html.push_str(&format!(
            r#"<div class="entryHead primary_homograph" id="w_{h}"><h2 class="hwg"><span class="hw">w{h}</span></h2></div>"#
        ));
        for b in 0..n {
            html.push_str(&format!(
                r#"<section class="gramb"><h3 class="ps pos"><span class="pos">pos{h}_{b}</span></h3><ul class="semb"><li><div class="trg"><p><span class="ind">def {h}.{b}</span></p></div></li></ul></section>"#
            ));
        }
    }
    html.push_str("</div>");
    html
}

#[rstest]
#[case(&[4])]
#[case(&[3, 2])]
#[case(&[1, 0, 2])]
#[case(&[2, 2, 2, 2])]
#[case(&[0, 5])]
fn ranges_partition_blocks(#[case] counts: &[usize]) {
    let html = page(counts);
    let m = Markup::parse(&html);
    let g = Grammar::compile().unwrap();
    let seg = segment(&m, &g).ok().unwrap();

    let mut start = 0;
    let want: Vec<HomographRange> = counts
        .iter()
        .map(|&n| {
            let r = HomographRange { start, end: start + n };
            start += n;
            r
        })
        .collect();

    assert_eq!(seg.headings.len(), counts.len());
    assert_eq!(seg.ranges, want);

    let covered: Vec<usize> = seg.ranges.iter().flat_map(|r| r.indices()).collect();
    let total: usize = counts.iter().sum();
    assert_eq!(covered, (0..total).collect::<Vec<_>>());
}

#[test]
fn run_scenario_three_then_two() {
    let html = page(&[3, 2]);
    let m = Markup::parse(&html);
    let g = Grammar::compile().unwrap();
    let seg = segment(&m, &g).ok().unwrap();
    assert_eq!(
        seg.ranges,
        vec![HomographRange { start: 0, end: 3 }, HomographRange { start: 3, end: 5 }]
    );
}

#[test]
fn blocks_land_in_their_own_entry() {
    let entries = extract_from_markup(&page(&[2, 1, 3])).unwrap();
    let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["w0", "w1", "w2"]);

    for (h, entry) in entries.iter().enumerate() {
        for label in entry.meaning.labels() {
            assert!(label.starts_with(&format!("pos{h}_")), "{label} in entry {h}");
        }
    }
    assert_eq!(entries[2].meaning.len(), 3);
}

#[test]
fn heading_with_no_blocks_yields_entry_without_meaning() {
    let entries = extract_from_markup(&page(&[0, 1])).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].meaning.is_empty());
    assert_eq!(entries[1].meaning.len(), 1);
}
