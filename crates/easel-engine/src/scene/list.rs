use super::DrawCmd;

/// Recorded command stream for one frame.
///
/// Commands are kept in submission order; there is no z-sorting because later
/// shapes must paint over earlier ones exactly as the sketch issued them.
///
/// `clear()` keeps the allocation, so a list reused across frames stops allocating
/// once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Commands in submission order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes and returns all recorded commands, leaving the list empty.
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn keeps_submission_order() {
        let mut list = DrawList::new();
        list.push(DrawCmd::Clear(Color::BLACK));
        list.push(DrawCmd::Translate(Vec2::new(1.0, 2.0)));
        list.push(DrawCmd::Pixel { at: Vec2::zero(), color: Color::WHITE });

        assert_eq!(list.len(), 3);
        assert!(matches!(list.items()[0], DrawCmd::Clear(_)));
        assert!(matches!(list.items()[2], DrawCmd::Pixel { .. }));
    }

    #[test]
    fn clear_and_take_empty_the_list() {
        let mut list = DrawList::new();
        list.push(DrawCmd::PushMatrix);
        assert_eq!(list.take(), vec![DrawCmd::PushMatrix]);
        assert!(list.is_empty());

        list.push(DrawCmd::PopMatrix);
        list.clear();
        assert!(list.is_empty());
    }
}
