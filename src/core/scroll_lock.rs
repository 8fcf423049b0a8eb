use smallvec::SmallVec;

/// Everything that may suspend page scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollOwner {
    Drawer,
    MediaModal,
    DetailModal,
}

/// Shared `no-scroll` body flag. Several overlays want it at once, so it is
/// held by owner and only clears when the last holder lets go.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    holders: SmallVec<[ScrollOwner; 4]>,
}

impl ScrollLock {
    #[inline]
    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    #[inline]
    pub fn is_held_by(&self, owner: ScrollOwner) -> bool {
        self.holders.contains(&owner)
    }

    /// Idempotent per owner.
    pub fn acquire(&mut self, owner: ScrollOwner) {
        if !self.is_held_by(owner) {
            self.holders.push(owner);
        }
    }

    pub fn release(&mut self, owner: ScrollOwner) {
        self.holders.retain(|h| *h != owner);
    }

    pub fn set(&mut self, owner: ScrollOwner, held: bool) {
        if held {
            self.acquire(owner);
        } else {
            self.release(owner);
        }
    }
}
