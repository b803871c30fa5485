use eframe::egui::pos2;
use ufoplot::annotations::{AnnotationLayer, description_text, guidelines_for, tooltip_rect};
use ufoplot::dataset::{Sighting, load_from_str};

fn record_with_years(years: &[i32], text: &str) -> Sighting {
    let dts: Vec<String> = years.iter().map(|y| format!("{y}-01-01")).collect();
    let json = format!(
        r#"[{{"dts": {dts:?}, "duration": 30, "state": "NY", "country": "USA", "text": {text:?}}}]"#
    );
    load_from_str(&json).unwrap().remove(0)
}

#[test]
fn single_occurrence_uses_singular_wording() {
    let record = record_with_years(&[1999], "a light");
    let body = description_text(&record, None);
    assert!(body.contains("Visible: 1 time."), "got: {body}");
    assert!(body.contains("Year: 1999."), "got: {body}");
    assert!(!body.contains("Years:"), "got: {body}");
}

#[test]
fn repeated_occurrences_list_all_years() {
    let record = record_with_years(&[2001, 2003], "two lights");
    let body = description_text(&record, None);
    assert!(body.contains("Visible: 2 times."), "got: {body}");
    assert!(body.contains("Years: 2001, 2003."), "got: {body}");
}

#[test]
fn description_is_appended_verbatim_without_a_cap() {
    let text = "Exactly what the witness wrote, punctuation and all.";
    let record = record_with_years(&[2010], text);
    let body = description_text(&record, None);
    assert!(body.ends_with(text));
}

#[test]
fn description_cap_truncates_with_ellipsis_marker() {
    let record = record_with_years(&[2010], "abcdefghij");
    let body = description_text(&record, Some(4));
    assert!(body.ends_with("abcd ..."), "got: {body}");

    // A cap longer than the text leaves it untouched.
    let body = description_text(&record, Some(100));
    assert!(body.ends_with("abcdefghij"));
}

#[test]
fn guideline_pair_runs_from_both_margins_to_the_point() {
    let point = pos2(300.0, 500.0);
    let [horizontal, vertical] = guidelines_for(point);

    assert_eq!(horizontal.from, pos2(60.0, 500.0));
    assert_eq!(horizontal.to, point);
    assert_eq!(vertical.from, pos2(300.0, 740.0));
    assert_eq!(vertical.to, point);
}

#[test]
fn selecting_replaces_rather_than_accumulates_guidelines() {
    let record = record_with_years(&[2001, 2003], "desc");
    let mut layer = AnnotationLayer::placeholder();
    assert!(layer.guidelines().is_empty());

    layer.select(&record, pos2(200.0, 300.0), None);
    assert_eq!(layer.guidelines().len(), 2);

    layer.select(&record, pos2(400.0, 600.0), None);
    assert_eq!(layer.guidelines().len(), 2, "stale guidelines must be removed");
    assert_eq!(layer.header(), "NY - USA");
}

#[test]
fn tooltip_rect_sits_inside_the_top_left_of_the_frame() {
    let rect = tooltip_rect();
    assert!(rect.min.x >= 60.0);
    assert!(rect.min.y < 60.0, "panel overlaps the top margin area");
    assert!(rect.width() >= 390.0);
}
