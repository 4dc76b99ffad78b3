// Host-side tests for the title letter layout.

#![allow(dead_code)]
mod letters {
    include!("../src/core/letters.rs");
}

use letters::*;

const TITLE: &str = "HAPPY BIRTHDAY MY LOVE";

#[test]
fn one_glyph_per_character_in_order() {
    let glyphs = layout_title(TITLE);
    assert_eq!(glyphs.len(), TITLE.len());
    let rebuilt: String = glyphs.iter().map(|g| g.ch).collect();
    assert_eq!(rebuilt, TITLE);
    for (i, g) in glyphs.iter().enumerate() {
        assert_eq!(g.index, i);
    }
}

#[test]
fn delays_stagger_by_index() {
    let glyphs = layout_title(TITLE);
    for (i, g) in glyphs.iter().enumerate() {
        assert!((g.delay_secs - 0.06 * i as f64).abs() < 1e-12);
    }
    for pair in glyphs.windows(2) {
        assert!(pair[1].delay_secs > pair[0].delay_secs);
    }
}

#[test]
fn delay_css_is_formatted_in_seconds() {
    let glyphs = layout_title(TITLE);
    assert_eq!(glyphs[0].animation_delay_css(), "0.00s");
    assert_eq!(glyphs[3].animation_delay_css(), "0.18s");
    assert_eq!(glyphs[21].animation_delay_css(), "1.26s");
}

#[test]
fn spaces_get_fixed_width() {
    let glyphs = layout_title(TITLE);
    let spaces: Vec<usize> = glyphs.iter().filter(|g| g.is_space).map(|g| g.index).collect();
    assert_eq!(spaces, vec![5, 14, 17]);
    for g in &glyphs {
        if g.is_space {
            assert_eq!(g.width_css(), Some("0.4em"));
        } else {
            assert_eq!(g.width_css(), None);
        }
    }
}

#[test]
fn layout_is_idempotent() {
    assert_eq!(layout_title(TITLE), layout_title(TITLE));
}

#[test]
fn empty_text_has_no_glyphs() {
    assert!(layout_title("").is_empty());
}
