/// Outcome of an event, passed up from components to the app loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Speed dial
    PrimaryPressed {
        /// Whether the press reached the state machine (false with no actions)
        engaged: bool,
        open: bool,
    },
    ItemSelected {
        index: usize,
        label: String,
    },
    Dismissed,

    // External resync of the dial
    ResetDial {
        active: bool,
    },

    // App control
    Tick,
    Quit,
    None,
}
