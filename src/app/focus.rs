/// Which table owns keyboard selection. Only tables with a terminate
/// action take focus; history is display-only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Processes,
    Threats,
}

impl Focus {
    pub fn label(self) -> &'static str {
        match self {
            Focus::Processes => "processes",
            Focus::Threats => "threats",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Focus::Processes => Focus::Threats,
            Focus::Threats => Focus::Processes,
        }
    }
}
