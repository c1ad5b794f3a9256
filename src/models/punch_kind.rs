use serde::Serialize;

/// Role of a punch, decided only by its position in the ordered list of
/// valid timestamps: even positions clock in, odd positions clock out.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PunchKind {
    In,
    Out,
}

impl PunchKind {
    pub fn from_position(index: usize) -> Self {
        if index % 2 == 0 {
            PunchKind::In
        } else {
            PunchKind::Out
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PunchKind::In => "in",
            PunchKind::Out => "out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, PunchKind::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, PunchKind::Out)
    }
}
