use plwah::{Bitset, Op, Operation, bitset};

fn offsets(b: &Bitset) -> Vec<plwah::Offset> {
    b.iter().collect()
}

#[test]
fn test_step_bookkeeping() {
    let b1 = bitset![10];
    let b2 = bitset![20];
    let b3 = bitset![12];
    let mut plan = Operation::with_primary(&b1);
    assert_eq!(plan.len(), 1);
    plan.add(&b2, Op::Or);
    assert_eq!(plan.len(), 2);
    plan.add(&b3, Op::Or);
    assert_eq!(plan.len(), 3);
    assert_eq!(plan.count(), 3);
}

#[test]
fn test_or_fold() {
    let b1 = bitset![100, 200, 300];
    let b2 = bitset![100];
    let b3 = bitset![300, 400];
    let mut plan = Operation::with_primary(&b1);
    plan.add(&b2, Op::Or);
    plan.add(&b3, Op::Or);
    let result = plan.exec();
    assert_eq!(result.count(), 4);
    assert_eq!(offsets(&result), [100, 200, 300, 400]);
}

#[test]
fn test_or_fold_count_without_exec() {
    let cases: &[(&[plwah::Offset], &[plwah::Offset], &[plwah::Offset], plwah::Offset)] = &[
        (&[1000], &[100], &[20], 3),
        (&[102, 10000], &[100], &[20, 101, 20000], 6),
        (&[101, 8000], &[100], &[20, 101, 8001], 5),
    ];
    for &(a, b, c, expected) in cases {
        let (a, b, c) = (
            Bitset::from_bits(a),
            Bitset::from_bits(b),
            Bitset::from_bits(c),
        );
        let mut plan = Operation::with_primary(&a);
        plan.add(&b, Op::Or);
        plan.add(&c, Op::Or);
        assert_eq!(plan.count(), expected);
        assert_eq!(plan.exec().count(), expected);
    }
}

#[test]
fn test_or_then_and() {
    let b1 = bitset![101, 102];
    let b2 = bitset![1000];
    let b3 = bitset![101, 1000];
    let mut plan = Operation::with_primary(&b1);
    plan.add(&b2, Op::Or);
    plan.add(&b3, Op::And);
    assert_eq!(plan.count(), 2);
    assert_eq!(offsets(&plan.exec()), [101, 1000]);
}

#[test]
fn test_exec_dense_blocks() {
    let b1 = bitset![1000];
    let b2 = bitset![100, 105, 130];
    let b3 = bitset![20];
    let mut plan = Operation::with_primary(&b1);
    plan.add(&b2, Op::Or);
    plan.add(&b3, Op::Or);
    let result = plan.exec();
    assert_eq!(result.count(), 5);
    for o in [20, 100, 105, 130, 1000] {
        assert!(result.get(o));
    }
}

#[test]
fn test_and_then_andnot() {
    let b1 = bitset![3, 1000, 1001, 1100];
    let b2 = bitset![3, 130, 1000, 1101];
    let b3 = bitset![1000];
    let mut plan = Operation::with_primary(&b1);
    plan.add(&b2, Op::And);
    plan.add(&b3, Op::AndNot);
    let result = plan.exec();
    assert_eq!(result.count(), 1);
    assert!(result.get(3));
    for o in [130, 1000, 1001, 1100, 1101] {
        assert!(!result.get(o));
    }
}

#[test]
fn test_nested_and() {
    let b1 = bitset![100, 200, 300];
    let b2 = bitset![100];
    let b3 = bitset![300, 400];
    let mut inner = Operation::with_primary(&b2);
    inner.add(&b3, Op::Or);
    let mut outer = Operation::with_primary(&b1);
    outer.add_nested(inner, Op::And);
    let result = outer.exec();
    assert_eq!(result.count(), 2);
    assert_eq!(offsets(&result), [100, 300]);
}

#[test]
fn test_nested_or() {
    let b1 = bitset![100, 200, 300];
    let b2 = bitset![100];
    let b3 = bitset![300, 400];
    let mut inner = Operation::with_primary(&b2);
    inner.add(&b3, Op::Or);
    let mut outer = Operation::with_primary(&b1);
    outer.add_nested(inner, Op::Or);
    let result = outer.exec();
    assert_eq!(result.count(), 4);
    assert_eq!(offsets(&result), [100, 200, 300, 400]);
}

#[test]
fn test_empty_operation() {
    let plan = Operation::new();
    assert!(plan.is_empty());
    assert_eq!(plan.count(), 0);
    assert!(plan.exec().is_empty());
}

#[test]
fn test_primary_only_reproduces_input() {
    let b = bitset![0, 31, 32, 100, 5000];
    let plan = Operation::with_primary(&b);
    let result = plan.exec();
    assert_eq!(result, b);
    assert_eq!(result.words(), b.words());
}

#[test]
fn test_leading_and_on_empty_primary() {
    let b = bitset![1, 2, 3];
    let mut plan = Operation::new();
    plan.add(&b, Op::And);
    assert!(plan.exec().is_empty());
}

#[test]
fn test_and_or_commute() {
    let a = bitset![1, 31, 32, 500, 1000];
    let b = bitset![31, 64, 500, 2000];
    assert_eq!(&a | &b, &b | &a);
    assert_eq!(&a & &b, &b & &a);
}

#[test]
fn test_associativity() {
    let a = bitset![1, 100, 200];
    let b = bitset![100, 300];
    let c = bitset![200, 300, 400];
    assert_eq!(&(&a | &b) | &c, &a | &(&b | &c));
    assert_eq!(&(&a & &b) & &c, &a & &(&b & &c));
}

#[test]
fn test_xor_twice_is_identity() {
    let a = bitset![0, 1, 31, 32, 100, 5000];
    let b = bitset![1, 31, 77, 5000, 6000];
    let back = &(&a ^ &b) ^ &b;
    assert_eq!(back, a);
    assert_eq!(back.words(), a.words());
}

#[test]
fn test_andnot_agrees_with_set_difference() {
    let a = bitset![3, 31, 32, 100, 1000, 1001];
    let b = bitset![31, 100, 999, 1001, 2000];
    let diff = &a - &b;
    let expected: Vec<plwah::Offset> = a.iter().filter(|o| !b.get(*o)).collect();
    assert_eq!(offsets(&diff), expected);
}

#[test]
fn test_xor() {
    let a = bitset![1, 2, 3];
    let b = bitset![2, 3, 4];
    assert_eq!(offsets(&(&a ^ &b)), [1, 4]);
}

#[cfg(feature = "offset64")]
#[test]
fn test_operation_over_far_offsets() {
    let b1 = bitset![1];
    let b2 = bitset![10_000_000_000, 100_000_000_000];
    let mut plan = Operation::with_primary(&b1);
    plan.add(&b2, Op::Or);
    let result = plan.exec();
    assert_eq!(result.count(), 3);
    assert!(result.get(1));
    assert!(result.get(10_000_000_000));
    assert!(result.get(100_000_000_000));
}
