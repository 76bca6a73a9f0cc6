/// Whether the point `(mx, my)` lies inside an `(x, y, w, h)` rectangle.
pub const fn point_in_rect(mx: u16, my: u16, rect: Option<(u16, u16, u16, u16)>) -> bool {
    if let Some((x, y, w, h)) = rect {
        mx >= x && mx < x + w && my >= y && my < y + h
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Rect hit-testing is half-open on both axes.
    fn point_in_rect_edges() {
        let r = Some((2, 3, 4, 2));
        assert!(point_in_rect(2, 3, r));
        assert!(point_in_rect(5, 4, r));
        assert!(!point_in_rect(6, 4, r));
        assert!(!point_in_rect(5, 5, r));
        assert!(!point_in_rect(0, 0, None));
    }
}
