use broadside::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    // A 10×10 board fits in u128
    assert!(BitBoard::<u128, 10>::try_new().is_ok());

    // Failure when board is too large
    let err = BitBoard::<u64, 10>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 10, capacity: 64 })));
}

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_from_iter_and_iter() {
    let bb = BitBoard::<u128, 10>::from_iter([(9, 9), (0, 1), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (9, 9)]);
    assert_eq!(bb.count_ones(), 2);
}

#[test]
fn test_subset_and_difference() {
    let ship = BitBoard::<u128, 10>::from_iter([(2, 2), (2, 3), (2, 4)]).unwrap();
    let hits = BitBoard::<u128, 10>::from_iter([(2, 3), (7, 7)]).unwrap();
    assert!(!ship.is_subset_of(&hits));

    let left = ship & !hits;
    assert_eq!(left.iter_set_bits().collect::<Vec<_>>(), vec![(2, 2), (2, 4)]);

    let all = BitBoard::<u128, 10>::from_iter([(2, 2), (2, 3), (2, 4), (7, 7)]).unwrap();
    assert!(ship.is_subset_of(&all));
}
