// Monetary amounts are whole cents and never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceCents(i32);

impl PriceCents{
    pub fn parse(cents: i32) -> Result<PriceCents, String>{
        if cents >= 0 {
            Ok(Self(cents))
        } else {
            Err(format!("{} is not a valid price in cents", cents))
        }
    }

    pub fn inner(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for PriceCents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
