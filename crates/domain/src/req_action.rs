use std::fmt;

/// Terminal result of handling one inverse-query record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReqAction {
    Finish,
    Refuse,
    Return,
}

impl ReqAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReqAction::Finish => "Finish",
            ReqAction::Refuse => "Refuse",
            ReqAction::Return => "Return",
        }
    }
}

impl fmt::Display for ReqAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
