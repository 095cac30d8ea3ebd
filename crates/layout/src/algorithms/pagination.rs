use folio_types::EPSILON;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f64,
}

/// Checks whether a segment fits in the space left on the current page.
///
/// * `used_height`: Height already consumed on the page, measured from the content top.
/// * `segment_height`: The height the segment needs.
/// * `content_height`: Total content height of the page.
/// * `page_is_empty`: A segment is never moved off an empty page, even if it overflows.
pub fn check_segment_fit(
    used_height: f64,
    segment_height: f64,
    content_height: f64,
    page_is_empty: bool,
) -> BreakAnalysis {
    let available = (content_height - used_height).max(0.0);
    BreakAnalysis {
        should_break: !page_is_empty && segment_height > available + EPSILON,
        remaining_height: available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_exactly() {
        let a = check_segment_fit(177.0, 100.0, 277.0, false);
        assert!(!a.should_break);
        assert_eq!(a.remaining_height, 100.0);
    }

    #[test]
    fn test_breaks_when_too_tall() {
        let a = check_segment_fit(200.0, 100.0, 277.0, false);
        assert!(a.should_break);
        assert_eq!(a.remaining_height, 77.0);
    }

    #[test]
    fn test_empty_page_never_breaks() {
        let a = check_segment_fit(0.0, 500.0, 277.0, true);
        assert!(!a.should_break);
    }

    #[test]
    fn test_overflowed_page_reports_zero_remaining() {
        let a = check_segment_fit(300.0, 1.0, 277.0, false);
        assert_eq!(a.remaining_height, 0.0);
        assert!(a.should_break);
    }
}
