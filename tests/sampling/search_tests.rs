use std::cmp::Ordering;
use river_sampling::sampling::errors::SamplingError;
use river_sampling::sampling::search::{binary_search_by_containment, containment};
use river_sampling::sampling::segment::SegmentInverse;

type TestResult = Result<(), SamplingError>;

fn bucket_cmp(bucket: &(i32, i32), target: i32) -> Ordering {
    let (lo, hi) = *bucket;
    if target >= hi { Ordering::Less }
    else if target < lo { Ordering::Greater }
    else { Ordering::Equal }
}

#[test]
fn finds_every_bucket() -> TestResult {
    let buckets = [(0, 2), (2, 5), (5, 6), (6, 10), (10, 11)];
    for (expected, &(lo, hi)) in buckets.iter().enumerate() {
        for t in lo..hi {
            let idx = binary_search_by_containment(&buckets, t as f64, |b| bucket_cmp(b, t))?;
            assert_eq!(idx, expected);
        }
    }
    Ok(())
}

#[test]
fn empty_slice_not_found() {
    let buckets: [(i32, i32); 0] = [];
    let err = binary_search_by_containment(&buckets, 1.0, |b| bucket_cmp(b, 1)).unwrap_err();
    assert!(matches!(err, SamplingError::NotFound { target } if target == 1.0));
}

#[test]
fn gap_not_found() {
    // 3 falls between the buckets
    let buckets = [(0, 2), (4, 6)];
    let err = binary_search_by_containment(&buckets, 3.0, |b| bucket_cmp(b, 3)).unwrap_err();
    assert!(matches!(err, SamplingError::NotFound { .. }));
}

#[test]
fn past_either_end_not_found() {
    let buckets = [(0, 2), (2, 4)];
    assert!(binary_search_by_containment(&buckets, -1.0, |b| bucket_cmp(b, -1)).is_err());
    assert!(binary_search_by_containment(&buckets, 4.0, |b| bucket_cmp(b, 4)).is_err());
}

#[test]
fn containment_three_way() -> TestResult {
    let seg = SegmentInverse::new(0.0, 0.2, 1.0, 0.6)?;
    assert_eq!(containment(&seg, 0.1), Ordering::Greater);
    assert_eq!(containment(&seg, 0.2), Ordering::Equal);
    assert_eq!(containment(&seg, 0.59), Ordering::Equal);
    assert_eq!(containment(&seg, 0.6), Ordering::Less);
    assert_eq!(containment(&seg, 0.9), Ordering::Less);
    Ok(())
}

#[test]
fn shared_boundary_routes_right() -> TestResult {
    let segs = [
        SegmentInverse::new(0.0, 0.0, 1.0, 0.3)?,
        SegmentInverse::new(1.0, 0.3, 2.0, 0.7)?,
        SegmentInverse::new(2.0, 0.7, 3.0, 1.0)?,
    ];
    let idx = binary_search_by_containment(&segs, 0.3, |s| containment(s, 0.3))?;
    assert_eq!(idx, 1);
    let idx = binary_search_by_containment(&segs, 0.7, |s| containment(s, 0.7))?;
    assert_eq!(idx, 2);
    Ok(())
}

#[test]
fn zero_extent_segment_never_matches() -> TestResult {
    let segs = [
        SegmentInverse::new(0.0, 0.0, 1.0, 0.5)?,
        SegmentInverse::new(1.0, 0.5, 2.0, 0.5)?,
        SegmentInverse::new(2.0, 0.5, 3.0, 1.0)?,
    ];
    let idx = binary_search_by_containment(&segs, 0.5, |s| containment(s, 0.5))?;
    assert_eq!(idx, 2);
    Ok(())
}
