use std::str::FromStr;

/// Variant approaches to minimizing a learnt clause after analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Minimization {
    /// Keep the learnt clause as obtained by resolution.
    None = 0,

    /// Remove a literal if each other literal of its reason is in the clause, or fixed.
    Cheap,

    /// Remove a literal if it is implied by the other literals of the clause through any chain of reasons.
    Recursive,
}

impl std::fmt::Display for Minimization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Cheap => write!(f, "Cheap"),
            Self::Recursive => write!(f, "Recursive"),
        }
    }
}

impl Minimization {
    /// The minimum Minimization type.
    pub const MIN: Minimization = Minimization::None;

    /// The maximum Minimization type.
    pub const MAX: Minimization = Minimization::Recursive;
}

impl FromStr for Minimization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),

            "cheap" => Ok(Self::Cheap),

            "recursive" => Ok(Self::Recursive),

            unknown => Err(format!("Unknown minimization: {unknown}")),
        }
    }
}
