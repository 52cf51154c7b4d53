//! Tests for the arena-backed chart representation.

use orgmv::domain::{sample_chart, DomainError, Employee, OrgArena};
use orgmv::util::testing;

#[test]
fn given_sample_chart_when_round_tripping_then_structure_preserved() {
    testing::init_test_setup();
    let chart = sample_chart();
    let tree = OrgArena::from_chart(&chart).unwrap();

    assert_eq!(tree.to_chart(), Some(chart));
}

#[test]
fn given_sample_chart_then_count_and_depth_match() {
    let tree = OrgArena::from_chart(&sample_chart()).unwrap();

    assert_eq!(tree.employee_count(), 15);
    // CEO -> Sarah -> Cassandra -> Bob -> Tina -> Will
    assert_eq!(tree.depth(), 6);
}

#[test]
fn given_employee_below_root_when_locating_then_supervisor_is_reported() {
    let tree = OrgArena::from_chart(&sample_chart()).unwrap();

    let located = tree.locate(12).expect("Bob exists");
    assert_eq!(located.parent_id, 6);

    let located = tree.locate(2).expect("Sarah exists");
    assert_eq!(located.parent_id, 1);
}

#[test]
fn given_root_id_when_locating_then_none() {
    let tree = OrgArena::from_chart(&sample_chart()).unwrap();
    assert!(tree.locate(1).is_none());
}

#[test]
fn given_unknown_id_when_locating_then_none() {
    let tree = OrgArena::from_chart(&sample_chart()).unwrap();
    assert!(tree.locate(9999).is_none());
}

#[test]
fn given_duplicate_id_when_building_then_error() {
    let mut chart = sample_chart();
    chart.subordinates.push(Employee::new(7, "Copy of Harry"));

    let result = OrgArena::from_chart(&chart);
    assert!(matches!(result, Err(DomainError::DuplicateId(7))));
}

#[test]
fn given_tree_when_iterating_then_visits_all_nodes_root_first() {
    let tree = OrgArena::from_chart(&sample_chart()).unwrap();

    let ids: Vec<_> = tree.iter().map(|(_, node)| node.data.id).collect();
    assert_eq!(ids.len(), 15);
    assert_eq!(ids[0], 1);
    // Pre-order: Sarah's whole branch comes before Tyler's
    let sarah = ids.iter().position(|&id| id == 2).unwrap();
    let will = ids.iter().position(|&id| id == 15).unwrap();
    let tyler = ids.iter().position(|&id| id == 3).unwrap();
    assert!(sarah < will && will < tyler);
}

#[test]
fn given_single_employee_chart_then_trivial_tree() {
    let chart = Employee::new(42, "Solo Founder");
    let tree = OrgArena::from_chart(&chart).unwrap();

    assert_eq!(tree.employee_count(), 1);
    assert_eq!(tree.depth(), 1);
    assert!(tree.locate(42).is_none(), "root has no supervisor");
    assert_eq!(tree.to_chart(), Some(chart));
}
