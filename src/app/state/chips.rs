/// Two-phase Backspace confirmation for removing the trailing chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipFocus {
    #[default]
    None,
    /// The chip at this selection index is removed by the next Backspace.
    Armed(usize),
}

impl ChipFocus {
    #[must_use]
    pub fn armed_index(self) -> Option<usize> {
        match self {
            ChipFocus::Armed(i) => Some(i),
            ChipFocus::None => None,
        }
    }

    #[must_use]
    pub fn is_armed(self) -> bool {
        matches!(self, ChipFocus::Armed(_))
    }
}
