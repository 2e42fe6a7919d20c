use urania::aspects::{merge_aspects, AspectKind, AspectRecord};

#[test]
fn test_primary_record_wins() {
    let primary = vec![AspectRecord::new("A", "B", AspectKind::Trine, 1.0)];
    let secondary = vec![
        AspectRecord::new("A", "B", AspectKind::Trine, 5.0),
        AspectRecord::new("C", "D", AspectKind::Sextile, 2.0),
    ];

    let merged = merge_aspects(&primary, &secondary);

    assert_eq!(
        merged,
        vec![
            AspectRecord::new("A", "B", AspectKind::Trine, 1.0),
            AspectRecord::new("C", "D", AspectKind::Sextile, 2.0),
        ]
    );
}

#[test]
fn test_pair_order_does_not_matter() {
    let primary = vec![AspectRecord::new("t_Sun", "Moon", AspectKind::Square, 0.4).with_applying(false)];
    let secondary = vec![AspectRecord::new("Moon", "t_Sun", AspectKind::Square, 0.41)];

    let merged = merge_aspects(&primary, &secondary);

    assert_eq!(merged, primary);
}

#[test]
fn test_same_pair_different_kind_is_kept() {
    let primary = vec![AspectRecord::new("A", "B", AspectKind::Trine, 1.0)];
    let secondary = vec![AspectRecord::new("B", "A", AspectKind::Sextile, 1.0)];

    let merged = merge_aspects(&primary, &secondary);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[1].kind, AspectKind::Sextile);
}

#[test]
fn test_length_bound_and_secondary_duplicates() {
    let primary = vec![
        AspectRecord::new("Sun", "Moon", AspectKind::Conjunction, 1.0),
        AspectRecord::new("Sun", "Mars", AspectKind::Square, 2.0),
    ];
    let secondary = vec![
        AspectRecord::new("Venus", "Mars", AspectKind::Trine, 3.0),
        AspectRecord::new("Mars", "Venus", AspectKind::Trine, 3.5),
        AspectRecord::new("Mars", "Sun", AspectKind::Square, 2.2),
    ];

    let merged = merge_aspects(&primary, &secondary);

    assert!(merged.len() <= primary.len() + secondary.len());
    assert_eq!(merged.len(), 3);
    assert_eq!(&merged[..2], &primary[..]);
    assert_eq!(merged[2].orb, 3.0);
}

#[test]
fn test_empty_inputs() {
    let records = vec![AspectRecord::new("A", "B", AspectKind::Opposition, 0.0)];
    assert!(merge_aspects(&[], &[]).is_empty());
    assert_eq!(merge_aspects(&records, &[]), records);
    assert_eq!(merge_aspects(&[], &records), records);
}
