//! Delivery address form and its validation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A field of the address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    Name,
    Mobile,
    Address,
    City,
    State,
    Pincode,
}

impl AddressField {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Mobile,
        Self::Address,
        Self::City,
        Self::State,
        Self::Pincode,
    ];

    /// Form input name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Mobile => "mobile",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Pincode => "pincode",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Mobile => "Mobile Number",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::Pincode => "Pincode",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why an address field was rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressError {
    #[error("{0} is required")]
    Missing(AddressField),
    #[error("Mobile Number must be exactly 10 digits")]
    InvalidMobile,
    #[error("Pincode must be exactly 6 digits")]
    InvalidPincode,
}

impl AddressError {
    /// The field the error belongs to.
    #[must_use]
    pub const fn field(self) -> AddressField {
        match self {
            Self::Missing(field) => field,
            Self::InvalidMobile => AddressField::Mobile,
            Self::InvalidPincode => AddressField::Pincode,
        }
    }
}

/// Address captured in the first checkout step.
///
/// Only ever lives inside the checkout flow. It is never sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressForm {
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl AddressForm {
    #[must_use]
    pub fn value(&self, field: AddressField) -> &str {
        match field {
            AddressField::Name => &self.name,
            AddressField::Mobile => &self.mobile,
            AddressField::Address => &self.address,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Pincode => &self.pincode,
        }
    }

    /// Check every field, reporting all problems at once.
    ///
    /// Fields must be non-blank; the mobile number must be exactly 10 digits
    /// and the pincode exactly 6. No semantic checks beyond the format.
    ///
    /// # Errors
    ///
    /// Returns one [`AddressError`] per rejected field, in form order.
    pub fn validate(&self) -> Result<(), Vec<AddressError>> {
        let errors: Vec<AddressError> = AddressField::ALL
            .into_iter()
            .filter_map(|field| self.check(field).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check(&self, field: AddressField) -> Result<(), AddressError> {
        let value = self.value(field).trim();
        if value.is_empty() {
            return Err(AddressError::Missing(field));
        }

        match field {
            AddressField::Mobile if !is_digits(value, 10) => Err(AddressError::InvalidMobile),
            AddressField::Pincode if !is_digits(value, 6) => Err(AddressError::InvalidPincode),
            _ => Ok(()),
        }
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}
