use crate::error::ScaleError;

/// Number of guests to cater for, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guests(u32);

impl Guests {
    pub fn new(count: u32) -> Result<Self, ScaleError> {
        if count == 0 {
            return Err(ScaleError::NoGuests);
        }
        Ok(Self(count))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Guests {
    type Error = ScaleError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_guests_rejected() {
        assert_eq!(Guests::new(0), Err(ScaleError::NoGuests));
    }

    #[test]
    fn test_positive_guests_accepted() {
        let guests = Guests::try_from(25).expect("25 guests should be valid");
        assert_eq!(guests.get(), 25);
    }
}
