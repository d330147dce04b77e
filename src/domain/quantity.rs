#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(i32);

impl Quantity{
    pub fn parse(quantity: i32) -> Result<Quantity, String>{
        if quantity >= 0 {
            Ok(Self(quantity))
        } else {
            Err(format!("{} is not a valid quantity", quantity))
        }
    }

    pub fn inner(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
