use eframe::egui::pos2;
use ufoplot::ChartView;
use ufoplot::annotations::tooltip_rect;
use ufoplot::dataset::load_from_str;

const SAMPLE: &str = r#"[
  {"dts": ["2005-01-01"], "duration": 5, "state": "NY", "country": "USA", "text": "first"},
  {"dts": ["2010-01-01"], "duration": 50, "state": "TX", "country": "USA", "text": "second"},
  {"dts": ["2015-01-01"], "duration": 100, "state": "CA", "country": "USA", "text": "third"}
]"#;

fn sample_view() -> ChartView {
    let records = load_from_str(SAMPLE).unwrap();
    ChartView::new(records, 1000.0, None)
}

fn projected(view: &ChartView, i: usize) -> eframe::egui::Pos2 {
    let (x, y) = view.scales().project(&view.records()[i]);
    pos2(x, y)
}

#[test]
fn clicking_a_point_selects_it() {
    let mut view = sample_view();
    assert_eq!(view.selected(), None);

    assert!(view.handle_click(projected(&view, 1)));
    assert_eq!(view.selected(), Some(1));
    assert_eq!(view.annotations().header(), "TX - USA");
}

#[test]
fn click_resolves_to_the_nearest_point() {
    let mut view = sample_view();
    let near_first = projected(&view, 0) + eframe::egui::vec2(8.0, -12.0);
    view.handle_click(near_first);
    assert_eq!(view.selected(), Some(0));
}

#[test]
fn reclicking_the_selected_point_is_idempotent() {
    let mut view = sample_view();
    let target = projected(&view, 2);
    assert!(view.handle_click(target));

    let guidelines_before = view.annotations().guidelines().to_vec();
    let header_before = view.annotations().header().to_string();
    let body_before = view.annotations().body().to_string();

    assert!(!view.handle_click(target), "re-click must not report a change");
    assert_eq!(view.selected(), Some(2));
    assert_eq!(view.annotations().guidelines(), guidelines_before.as_slice());
    assert_eq!(view.annotations().header(), header_before);
    assert_eq!(view.annotations().body(), body_before);
}

#[test]
fn guidelines_never_accumulate_across_clicks() {
    let mut view = sample_view();
    assert_eq!(view.annotations().guidelines().len(), 0);

    for &i in &[0usize, 1, 2, 0, 2, 1] {
        view.handle_click(projected(&view, i));
        assert_eq!(
            view.annotations().guidelines().len(),
            2,
            "exactly one guideline pair after every click"
        );
    }
}

#[test]
fn guidelines_terminate_at_the_selected_point() {
    let mut view = sample_view();
    let target = projected(&view, 1);
    view.handle_click(target);

    let guidelines = view.annotations().guidelines();
    assert_eq!(guidelines.len(), 2);
    for g in guidelines {
        assert_eq!(g.to, target);
    }
    // One runs from the left margin, one up from the bottom margin.
    assert!(guidelines.iter().any(|g| g.from.x == 60.0 && g.from.y == target.y));
    assert!(guidelines.iter().any(|g| g.from.y == 740.0 && g.from.x == target.x));
}

#[test]
fn clicks_on_the_tooltip_panel_do_not_reach_the_chart() {
    let mut view = sample_view();
    view.handle_click(projected(&view, 0));
    assert_eq!(view.selected(), Some(0));

    let inside_panel = tooltip_rect().center();
    assert!(!view.handle_click(inside_panel));
    assert_eq!(view.selected(), Some(0), "panel clicks never reselect");
}

#[test]
fn tooltip_starts_with_the_placeholder_instruction() {
    let view = sample_view();
    assert_eq!(
        view.annotations().header(),
        "Click on each point for more info"
    );
    assert!(view.annotations().body().is_empty());
    assert!(view.annotations().guidelines().is_empty());
}

#[test]
fn resize_reprojects_the_current_selection() {
    let mut view = sample_view();
    view.handle_click(projected(&view, 1));

    view.resize(800.0);
    assert_eq!(view.selected(), Some(1), "selection survives a relayout");

    let reprojected = projected(&view, 1);
    for g in view.annotations().guidelines() {
        assert_eq!(g.to, reprojected, "guidelines follow the new scales");
    }
}
