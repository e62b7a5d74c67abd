/// Tolerance for floating point drift when summing block heights.
pub const EPSILON: f32 = 0.01;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized logic to check if a block fits in the remaining space.
///
/// * `cursor_y`: The current Y position, measured from the top edge of the page.
/// * `block_height`: The required height for the block.
/// * `limit`: The Y position content may not extend past (top of the bottom margin).
pub fn check_fit(cursor_y: f32, block_height: f32, limit: f32) -> BreakAnalysis {
    let available = (limit - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: block_height > available + EPSILON,
        remaining_height: available,
    }
}

/// The vertical position on the current page. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    pub page: usize,
    pub offset: f32,
}

impl PageCursor {
    pub fn new(top_margin: f32) -> Self {
        Self {
            page: 1,
            offset: top_margin,
        }
    }

    pub fn advance(&mut self, dy: f32) {
        self.offset += dy;
    }

    /// Moves to the top of the following page.
    pub fn next_page(&mut self, top_margin: f32) {
        self.page += 1;
        self.offset = top_margin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_fit_within_epsilon() {
        let analysis = check_fit(100.0, 50.005, 150.0);
        assert!(!analysis.should_break);
        assert_eq!(analysis.remaining_height, 50.0);

        assert!(check_fit(100.0, 50.5, 150.0).should_break);
    }

    #[test]
    fn test_cursor_past_limit_has_no_room() {
        let analysis = check_fit(200.0, 1.0, 150.0);
        assert!(analysis.should_break);
        assert_eq!(analysis.remaining_height, 0.0);
    }

    #[test]
    fn test_cursor_next_page() {
        let mut cursor = PageCursor::new(40.0);
        cursor.advance(300.0);
        assert_eq!(cursor.offset, 340.0);
        cursor.next_page(40.0);
        assert_eq!(cursor, PageCursor { page: 2, offset: 40.0 });
    }
}
