//! Rendering tests — run the full pipeline and check the notation it draws.

use pretty_assertions::assert_eq;
use rudimentlib::renderer::{DrawInstruction, Point, TextAnchor};
use rudimentlib::{
    render, render_instructions, render_json_to_svg, render_to_surface, render_to_svg,
    DrawingSurface, Hand, LayoutConfig, RenderConfig, RudimentDictionary, Subdivision,
};

fn paradiddle(subdivision: Subdivision, bars: i64) -> RenderConfig {
    RenderConfig {
        rudiment_key: "paradiddle".to_string(),
        subdivision,
        bars,
        start_hand: Hand::R,
    }
}

#[test]
fn paradiddle_sixteenths_end_to_end() {
    let out = render(
        &paradiddle(Subdivision::Sixteenth, 1),
        &LayoutConfig::default(),
        &RudimentDictionary::default(),
    )
    .expect("render paradiddle");

    let hands: String = out.hits.iter().map(|h| h.hand.as_char()).collect();
    assert_eq!(hands, "LRLLRLRRLRLLRLRR");

    let accents: Vec<usize> = out
        .hits
        .iter()
        .enumerate()
        .filter(|(_, h)| h.accent)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(accents, vec![0, 8]);

    assert_eq!(out.notes.len(), 16);
    assert_eq!(out.beam_groups, vec![(0, 4), (4, 8), (8, 12), (12, 16)]);

    // Notes follow hits one-to-one, left to right.
    for (hit, note) in out.hits.iter().zip(&out.notes) {
        assert_eq!(hit.hand, note.hand);
        assert_eq!(hit.accent, note.accent_y.is_some());
    }
    assert!(out.notes.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn hit_counts_follow_subdivision_and_bars() {
    let dict = RudimentDictionary::default();
    let layout = LayoutConfig::default();
    for (sub, bars, expected) in [
        (Subdivision::Sixteenth, 1, 16),
        (Subdivision::Eighth, 1, 8),
        (Subdivision::Sixteenth, 2, 32),
        (Subdivision::Eighth, 2, 16),
    ] {
        let out = render(&paradiddle(sub, bars), &layout, &dict).unwrap();
        assert_eq!(out.hits.len(), expected, "{:?} × {} bars", sub, bars);
        assert_eq!(out.notes.len(), expected);
    }
}

#[test]
fn two_bars_label_and_spacing() {
    let out = render(
        &paradiddle(Subdivision::Eighth, 2),
        &LayoutConfig::default(),
        &RudimentDictionary::default(),
    )
    .unwrap();
    let DrawInstruction::Text { content, anchor, .. } = &out.instructions[1] else {
        panic!("second instruction should be the time signature");
    };
    assert_eq!(content, "8/4");
    assert_eq!(*anchor, TextAnchor::End);

    // 724 / 8 beats = 90.5 per beat, eighths sit 45.25 apart
    let gap = out.notes[1].x - out.notes[0].x;
    assert!((gap - 45.25).abs() < 1e-9);
}

#[test]
fn pipeline_is_idempotent() {
    let config = paradiddle(Subdivision::Sixteenth, 2);
    let layout = LayoutConfig::default();
    let dict = RudimentDictionary::default();
    let first = render_instructions(&config, &layout, &dict).unwrap();
    let second = render_instructions(&config, &layout, &dict).unwrap();
    assert_eq!(first, second);

    let svg_a = render_to_svg(&config, &layout, &dict).unwrap();
    let svg_b = render_to_svg(&config, &layout, &dict).unwrap();
    assert_eq!(svg_a, svg_b);
}

#[test]
fn beams_are_drawn_last() {
    let instructions = render_instructions(
        &paradiddle(Subdivision::Sixteenth, 1),
        &LayoutConfig::default(),
        &RudimentDictionary::default(),
    )
    .unwrap();

    assert!(matches!(instructions[0], DrawInstruction::Line { .. }));
    assert!(matches!(instructions[1], DrawInstruction::Text { .. }));

    let first_rect = instructions
        .iter()
        .position(|i| matches!(i, DrawInstruction::Rect { .. }))
        .unwrap();
    assert!(instructions[first_rect..]
        .iter()
        .all(|i| matches!(i, DrawInstruction::Rect { .. })));
    // 4 groups × 2 bars
    assert_eq!(instructions.len() - first_rect, 8);
}

#[test]
fn custom_dictionary_and_unknown_key() {
    let dict = RudimentDictionary::from_json(
        r#"{
            "double-stroke": {"name": "Double stroke roll", "sticking": "rrll", "accentEvery": 4},
            "singles": {"name": "Single stroke roll", "sticking": "RL"}
        }"#,
    )
    .unwrap();
    let layout = LayoutConfig::default();

    let mut config = paradiddle(Subdivision::Eighth, 1);
    config.rudiment_key = "double-stroke".to_string();
    let out = render(&config, &layout, &dict).unwrap();
    let hands: String = out.hits.iter().map(|h| h.hand.as_char()).collect();
    assert_eq!(hands, "RRLLRRLL");
    assert_eq!(out.hits.iter().filter(|h| h.accent).count(), 2);

    config.rudiment_key = "single-paradiddle-diddle".to_string();
    let out = render(&config, &layout, &dict).unwrap();
    let hands: String = out.hits.iter().map(|h| h.hand.as_char()).collect();
    assert_eq!(hands, "LRLLRLRR");
}

#[test]
fn svg_is_well_formed() {
    let svg = render_json_to_svg(Some(r#"{"bars": 2}"#), None, None).unwrap();
    let doc = roxmltree::Document::parse(&svg).expect("SVG should parse as XML");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("viewBox"), Some("0 0 780 260"));

    let count = |tag: &str| {
        root.descendants()
            .filter(|n| n.tag_name().name() == tag)
            .count()
    };
    assert_eq!(count("ellipse"), 32);
    assert_eq!(count("rect"), 16);
    assert_eq!(count("path"), 4);
    // staff line + 32 stems
    assert_eq!(count("line"), 33);
    assert_eq!(count("text"), 1);
}

#[test]
fn tuning_parameters_change_geometry() {
    let dict = RudimentDictionary::default();
    let config = paradiddle(Subdivision::Sixteenth, 1);
    let base = render(&config, &LayoutConfig::default(), &dict).unwrap();
    let tuned = render(
        &config,
        &LayoutConfig {
            stem_inward_factor: 1.0,
            beam_group_size: 8,
            ..LayoutConfig::default()
        },
        &dict,
    )
    .unwrap();
    assert!(tuned.notes[0].stem_x > base.notes[0].stem_x);
    assert_eq!(tuned.beam_groups, vec![(0, 8), (8, 16)]);
}

#[derive(Default)]
struct Recorder {
    ops: Vec<String>,
}

impl DrawingSurface for Recorder {
    fn clear(&mut self) {
        self.ops.clear();
    }
    fn line(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: &str) {
        self.ops.push("line".into());
    }
    fn text(&mut self, _: f64, _: f64, content: &str, _: f64, _: &str, _: TextAnchor, _: &str) {
        self.ops.push(format!("text {content}"));
    }
    fn ellipse(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: &str) {
        self.ops.push("ellipse".into());
    }
    fn rect(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: &str) {
        self.ops.push("rect".into());
    }
    fn path(&mut self, points: &[Point], _: f64, _: &str) {
        self.ops.push(format!("path {}", points.len()));
    }
}

#[test]
fn custom_surface_receives_primitives_in_order() {
    let mut surface = Recorder::default();
    surface.ops.push("stale".into());
    render_to_surface(
        &paradiddle(Subdivision::Eighth, 1),
        &LayoutConfig::default(),
        &RudimentDictionary::default(),
        &mut surface,
        &mut (),
    )
    .unwrap();

    assert_eq!(surface.ops[..5], ["line", "text 4/4", "ellipse", "line", "path 3"]);
    assert_eq!(surface.ops.last().map(String::as_str), Some("rect"));
    assert!(!surface.ops.iter().any(|op| op == "stale"));
}
