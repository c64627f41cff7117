/// A configuration option, bounded by some minimum and maximum value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option, as used by the cli.
    pub name: &'static str,

    /// The minimum permitted value of the option.
    pub min: T,

    /// The maximum permitted value of the option.
    pub max: T,

    /// The value of the option.
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within the bounds of the option.
    ///
    /// Returns true if the value was set, and false otherwise.
    pub fn set_checked(&mut self, value: T) -> bool {
        if self.min <= value && value <= self.max {
            self.value = value;
            true
        } else {
            log::warn!("Value for {} is out of bounds.", self.name);
            false
        }
    }
}
