use log::debug;

/// Number of simultaneous touch points the table tracks.
pub const MAX_TOUCH_POINTERS: usize = 16;

/// Maps toolkit touch ids onto small, stable pointer ids.
///
/// The slot index is the id handed to the application; it stays fixed for the
/// whole gesture and is freed with [`release`](Self::release) once the touch
/// ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchPointers {
    slots: [Option<i32>; MAX_TOUCH_POINTERS],
}

impl Default for TouchPointers {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchPointers {
    pub fn new() -> Self {
        Self {
            slots: [None; MAX_TOUCH_POINTERS],
        }
    }

    /// Returns the pointer id for `touch`, claiming a free slot if needed.
    ///
    /// When every slot is taken the result is `MAX_TOUCH_POINTERS + touch`,
    /// with negative touches counted as zero. It never collides with a real
    /// slot but may repeat across overflowing touches.
    pub fn obtain(&mut self, touch: i32) -> i32 {
        if let Some(index) = self.slots.iter().position(|&slot| slot == Some(touch)) {
            return index as i32;
        }

        if let Some(index) = self.slots.iter().position(Option::is_none) {
            self.slots[index] = Some(touch);
            return index as i32;
        }

        debug!("Touch table full, touch {} overflows", touch);

        (MAX_TOUCH_POINTERS as i32).saturating_add(touch.max(0))
    }

    /// Frees a slot. Ids outside the table, such as overflow ids, are ignored.
    pub fn release(&mut self, pointer: i32) {
        let Ok(index) = usize::try_from(pointer) else {
            return;
        };

        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    pub fn get(&self, pointer: i32) -> Option<i32> {
        usize::try_from(pointer)
            .ok()
            .and_then(|index| self.slots.get(index).copied().flatten())
    }

    pub fn active(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_empty() {
        let pointers = TouchPointers::new();
        assert_eq!(pointers.active(), 0);
        assert_eq!(pointers.get(0), None);
    }

    #[test]
    fn reuses_slot_for_same_touch() {
        let mut pointers = TouchPointers::new();
        assert_eq!(pointers.obtain(42), 0);
        assert_eq!(pointers.obtain(7), 1);
        assert_eq!(pointers.obtain(42), 0);
        assert_eq!(pointers.active(), 2);
    }

    #[test]
    fn released_slot_is_reused() {
        let mut pointers = TouchPointers::new();
        let first = pointers.obtain(100);
        pointers.obtain(200);
        pointers.release(first);

        assert_eq!(pointers.get(first), None);
        assert_eq!(pointers.obtain(300), first);
        assert_eq!(pointers.get(first), Some(300));
    }

    #[test]
    fn negative_touch_id_is_tracked() {
        let mut pointers = TouchPointers::new();
        assert_eq!(pointers.obtain(-1), 0);
        assert_eq!(pointers.obtain(5), 1);
        assert_eq!(pointers.obtain(-1), 0);
    }

    #[test]
    fn overflow_ids_land_outside_table() {
        let mut pointers = TouchPointers::new();
        for touch in 0..MAX_TOUCH_POINTERS as i32 {
            assert_eq!(pointers.obtain(touch + 1000), touch);
        }

        assert_eq!(pointers.obtain(3), MAX_TOUCH_POINTERS as i32 + 3);
        assert_eq!(pointers.active(), MAX_TOUCH_POINTERS);
    }

    #[test]
    fn negative_overflow_stays_outside_table() {
        let mut pointers = TouchPointers::new();
        for touch in 0..MAX_TOUCH_POINTERS as i32 {
            pointers.obtain(touch + 100);
        }

        let overflow = pointers.obtain(-1);
        assert_eq!(overflow, MAX_TOUCH_POINTERS as i32);
        assert_eq!(pointers.obtain(i32::MIN), MAX_TOUCH_POINTERS as i32);

        pointers.release(overflow);
        assert_eq!(pointers.active(), MAX_TOUCH_POINTERS);
        assert_eq!(pointers.get(MAX_TOUCH_POINTERS as i32 - 1), Some(115));
    }

    #[test]
    fn releasing_out_of_range_is_ignored() {
        let mut pointers = TouchPointers::new();
        pointers.obtain(1);
        let before = pointers.clone();

        pointers.release(MAX_TOUCH_POINTERS as i32 + 1);
        pointers.release(-4);

        assert_eq!(pointers, before);
    }

    proptest! {
        #[test]
        fn slot_is_stable_until_released(touches in proptest::collection::vec(0i32..10_000, 1..MAX_TOUCH_POINTERS)) {
            let mut pointers = TouchPointers::new();
            let mut touches = touches;
            touches.sort_unstable();
            touches.dedup();

            let started: Vec<i32> = touches.iter().map(|&t| pointers.obtain(t)).collect();
            let updated: Vec<i32> = touches.iter().map(|&t| pointers.obtain(t)).collect();
            prop_assert_eq!(&started, &updated);

            for &pointer in &started {
                prop_assert!((0..MAX_TOUCH_POINTERS as i32).contains(&pointer));
            }

            let ended: Vec<i32> = touches.iter().map(|&t| pointers.obtain(t)).collect();
            prop_assert_eq!(&started, &ended);
            for pointer in ended {
                pointers.release(pointer);
            }
            prop_assert_eq!(pointers.active(), 0);
        }

        #[test]
        fn full_table_never_collides(extra in any::<i32>()) {
            let mut pointers = TouchPointers::new();
            for touch in 0..MAX_TOUCH_POINTERS as i32 {
                pointers.obtain(touch.wrapping_add(extra).wrapping_add(1));
            }

            prop_assert!(pointers.obtain(extra) >= MAX_TOUCH_POINTERS as i32);
        }
    }
}
