use gridlock::{BitBoard, BitBoardError, Vehicle};

type BB = BitBoard<u64, 6>;

#[test]
fn test_set_get_clear() {
    let mut bb = BB::new();
    assert!(bb.is_empty());
    bb.set(3, 2).unwrap();
    assert!(bb.get(3, 2).unwrap());
    assert!(!bb.get(2, 3).unwrap());
    assert_eq!(bb.count_ones(), 1);
    bb.clear(3, 2).unwrap();
    assert!(bb.is_empty());
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut bb = BB::new();
    assert_eq!(
        bb.set(6, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { x: 6, y: 0 }
    );
    assert_eq!(
        bb.get(0, 6).unwrap_err(),
        BitBoardError::IndexOutOfBounds { x: 0, y: 6 }
    );
}

#[test]
fn test_intersection_and_union() {
    let a = BB::from_iter([(0, 0), (1, 0), (2, 0)]).unwrap();
    let b = BB::from_iter([(2, 0), (3, 0)]).unwrap();
    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 4);
    let c = BB::from_iter([(0, 5)]).unwrap();
    assert!((a & c).is_empty());
}

#[test]
fn test_vehicle_footprint() {
    let v = Vehicle::horizontal(1, 2, 4, 3);
    let mask = v.mask().unwrap();
    assert_eq!(mask.count_ones(), 3);
    assert!(mask.get(2, 4).unwrap());
    assert!(mask.get(3, 4).unwrap());
    assert!(mask.get(4, 4).unwrap());

    let w = Vehicle::vertical(2, 5, 3, 3);
    assert_eq!(w.mask().unwrap().count_ones(), 3);
}

#[test]
fn test_footprint_overflow_is_error() {
    // length 3 starting at x=4 would need x=6
    let v = Vehicle::horizontal(1, 4, 0, 3);
    assert!(v.mask().is_err());
    // same footprint one cell earlier is fine
    assert!(v.mask_at(3, 0).is_ok());
}
