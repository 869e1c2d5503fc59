//! Fixed-size page slicing shared by every question listing.

use crate::error::AppError;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice one 1-based page out of `items`. An empty page is NotFound, whether the
/// page is past the end, below 1, or `items` is empty.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Result<Vec<T>, AppError> {
    let current = page
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .and_then(|start| items.get(start..))
        .map(|rest| rest.iter().take(QUESTIONS_PER_PAGE).cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    if current.is_empty() {
        return Err(AppError::NotFound(format!(
            "No question is present for the page number {page}"
        )));
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: i64) -> Vec<i64> {
        (1..=n).collect()
    }

    #[test]
    fn full_and_partial_pages() {
        let items = ids(23);
        assert_eq!(paginate(&items, 1).unwrap(), ids(10));
        assert_eq!(paginate(&items, 2).unwrap(), (11..=20).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 3).unwrap(), vec![21, 22, 23]);
    }

    #[test]
    fn page_sizes_follow_min_rule() {
        for total in [1i64, 9, 10, 11, 30, 31] {
            let items = ids(total);
            let pages = (total as usize).div_ceil(QUESTIONS_PER_PAGE) as i64;
            for p in 1..=pages {
                let expected = QUESTIONS_PER_PAGE.min((total - 10 * (p - 1)) as usize);
                assert_eq!(paginate(&items, p).unwrap().len(), expected, "total={total} page={p}");
            }
            assert!(paginate(&items, pages + 1).is_err());
        }
    }

    #[test]
    fn out_of_range_pages_are_not_found() {
        let items = ids(5);
        for page in [0, -1, 2, i64::MAX, i64::MIN] {
            match paginate(&items, page) {
                Err(AppError::NotFound(msg)) => {
                    assert_eq!(msg, format!("No question is present for the page number {page}"))
                }
                other => panic!("page {page}: expected NotFound, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_input_is_not_found() {
        assert!(matches!(paginate::<i64>(&[], 1), Err(AppError::NotFound(_))));
    }
}
