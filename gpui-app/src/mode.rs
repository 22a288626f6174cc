/// Application modes determine how keyboard input is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,       // Screen content has focus
    ConfirmLeave, // Unsaved-changes confirmation dialog
    About,        // About Stencil dialog
}

impl Mode {
    /// True if a modal overlay is showing (screen content is inert)
    pub fn is_overlay(&self) -> bool {
        matches!(self, Mode::ConfirmLeave | Mode::About)
    }
}
