use super::*;
use crate::config::LayoutConfig;
use crate::layout::{Container, Item, compute_layout_detailed};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_records_match_placements() {
    let items = vec![Item::labelled(25.0, 200.0, "who-am-i"), Item::new(18.0, 200.0)];
    let config = LayoutConfig::default();
    let container = Container::new(1920.0, 1080.0);
    let placed = compute_layout_detailed(&items, container, &config, &mut StdRng::seed_from_u64(4));
    let frame = LayoutFrame::new(container, &items, &placed, &config);

    let recs = records(&frame);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].label.as_deref(), Some("who-am-i"));
    assert!(recs[1].label.is_none());
    assert_eq!(recs[0].x, placed[0].placement.x);
    assert_eq!(recs[0].width, 480.0);
    assert!((recs[0].x_percent - placed[0].placement.x / 1920.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_json_output_parses() {
    let items = vec![Item::new(25.0, 200.0)];
    let config = LayoutConfig::default();
    let container = Container::new(1920.0, 1080.0);
    let placed = compute_layout_detailed(&items, container, &config, &mut StdRng::seed_from_u64(4));
    let frame = LayoutFrame::new(container, &items, &placed, &config);

    let out = JsonRenderer::new(false).render(&frame);
    assert!(!out.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let first = &value[0];
    assert_eq!(first["index"], 0);
    assert_eq!(first["outcome"]["kind"], "clear");
    assert!(first.get("label").is_none());

    let pretty = JsonRenderer::new(true).render(&frame);
    assert!(pretty.contains('\n'));
}
