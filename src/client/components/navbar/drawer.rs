/// Visibility of the mobile drawer. Local to the navbar and never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Handler of the drawer's role switch button: starts the switch and closes the drawer.
pub fn switch_from_drawer(drawer: &mut DrawerState, switch_role: impl FnOnce()) {
    switch_role();
    drawer.close();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect one toggle to open the drawer and a second to close it again
    #[test]
    fn toggle_twice_restores_state() {
        let mut drawer = DrawerState::default();
        assert!(!drawer.is_open());

        drawer.toggle();
        assert!(drawer.is_open());

        drawer.toggle();
        assert!(!drawer.is_open());
        assert_eq!(drawer, DrawerState::default());
    }

    /// Expect closing an already closed drawer to leave it closed
    #[test]
    fn close_is_idempotent() {
        let mut drawer = DrawerState::default();

        drawer.close();
        assert!(!drawer.is_open());

        drawer.toggle();
        drawer.close();
        drawer.close();
        assert!(!drawer.is_open());
    }

    /// Expect the drawer's switch button to start exactly one switch and close the drawer
    #[test]
    fn drawer_switch_starts_switch_and_closes() {
        let mut drawer = DrawerState::default();
        drawer.toggle();

        let mut started = 0;
        switch_from_drawer(&mut drawer, || started += 1);

        assert_eq!(started, 1);
        assert!(!drawer.is_open());
    }
}
