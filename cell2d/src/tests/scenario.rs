use std::f64::consts::LN_2;

use super::grid;
use crate::{Field, Rule};

#[test]
fn test_dead_rule_end_to_end() {
    let initial = grid(&[&[1, 0, 0], &[0, 0, 0], &[0, 0, 0]]);
    let mut field = Field::with_grid(initial.clone(), Rule::new(0));
    field.step();

    for row in 0..3 {
        for col in 0..3 {
            assert!(!field.current_cell(row, col));
        }
    }
    assert_eq!(field.previous(), &initial);
    assert_eq!(field.entropy(), 0.0);
    // The one cell that died still counts against temporal stability.
    assert_eq!(field.sticky_rate(), 8.0 / 9.0);

    // Once the field has stayed dead for a step it is perfectly sticky.
    field.step();
    assert_eq!(field.sticky_rate(), 1.0);
    assert_eq!(field.entropy(), 0.0);
}

#[test]
fn test_full_rule_end_to_end() {
    let mut field = Field::new(7, 5, Rule::new(u32::MAX)).unwrap();
    field.initialize_random(Some(3));
    field.step();
    assert_eq!(field.current().live_count(), 35);
    field.step();
    assert_eq!(field.entropy(), 0.0);
    assert_eq!(field.sticky_rate(), 1.0);
}

#[test]
fn test_first_frame_is_all_births() {
    let mut field = Field::new(12, 12, Rule::new(0x0f0f_f0f0)).unwrap();
    field.initialize_random(Some(9));
    field.apply_central_mask();
    assert_eq!(field.previous().live_count(), 0);
    for row in 0..12 {
        for col in 0..12 {
            if field.current_cell(row, col) {
                assert!(!field.previous_cell(row, col));
            }
        }
    }
}

#[test]
fn test_blinking_rule() {
    // Next state = !center. A uniform field alternates between all-0 and
    // all-1, so it is spatially smooth but never temporally stable.
    let mut field = Field::new(4, 4, Rule::new(0x0000_ffff)).unwrap();
    field.step();
    assert_eq!(field.current().live_count(), 16);
    assert_eq!(field.sticky_rate(), 0.0);
    field.step();
    assert_eq!(field.current().live_count(), 0);
    assert_eq!(field.sticky_rate(), 0.0);
}

#[test]
fn test_parsed_rule_drives_field() {
    // Next state = east neighbor: the pattern drifts one column west per step.
    let rule: Rule = "0xCCCCCCCC".parse().unwrap();
    let mut field = Field::with_grid(grid(&[&[0, 0, 1, 0], &[0, 0, 0, 0]]), rule);
    field.step();
    assert_eq!(field.current(), &grid(&[&[0, 1, 0, 0], &[0, 0, 0, 0]]));
    field.step();
    field.step();
    assert_eq!(field.current(), &grid(&[&[0, 0, 0, 1], &[0, 0, 0, 0]]));
}

#[test]
fn test_metrics_do_not_mutate() {
    let mut field = Field::new(20, 20, Rule::new(0x1ee7_c0de)).unwrap();
    field.initialize_random(Some(1));
    field.step();
    let before = field.clone();
    let first = field.metrics();
    let second = field.metrics();
    assert_eq!(first, second);
    assert_eq!(field.current(), before.current());
    assert_eq!(field.previous(), before.previous());
    assert_eq!(field.generation(), before.generation());
    assert!(first.entropy <= LN_2 + 1e-12);
}
