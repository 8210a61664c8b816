use std::cmp::Ordering;

/// Float which compares equal to any value within `1e-9` or 4 ulps of it.
/// Used wherever layout invariants are checked, never by the packer's own fit test.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = 1e-9, ulps = 4)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self == other {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}
