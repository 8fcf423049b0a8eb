/// Mobile navigation drawer behind the hamburger button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileDrawer {
    open: bool,
}

impl MobileDrawer {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A mobile link was followed. Returns true if the drawer was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
