//! Form field value objects

use std::fmt;
use std::str::FromStr;

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Choice from the fetched option list, with a leading placeholder
    Select { placeholder: &'static str },
    /// Free numeric input
    Number,
}

/// The fixed set of vehicle attributes the prediction service expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    CarName,
    VehicleAge,
    KmDriven,
    SellerType,
    FuelType,
    TransmissionType,
    Mileage,
    Engine,
    MaxPower,
    Seats,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 10] = [
        FieldName::CarName,
        FieldName::VehicleAge,
        FieldName::KmDriven,
        FieldName::SellerType,
        FieldName::FuelType,
        FieldName::TransmissionType,
        FieldName::Mileage,
        FieldName::Engine,
        FieldName::MaxPower,
        FieldName::Seats,
    ];

    /// Wire name used by the prediction service
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CarName => "car_name",
            Self::VehicleAge => "vehicle_age",
            Self::KmDriven => "km_driven",
            Self::SellerType => "seller_type",
            Self::FuelType => "fuel_type",
            Self::TransmissionType => "transmission_type",
            Self::Mileage => "mileage",
            Self::Engine => "engine",
            Self::MaxPower => "max_power",
            Self::Seats => "seats",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CarName => "Car Name",
            Self::VehicleAge => "Vehicle Age",
            Self::KmDriven => "Kilometers Driven",
            Self::SellerType => "Seller Type",
            Self::FuelType => "Fuel Type",
            Self::TransmissionType => "Transmission Type",
            Self::Mileage => "Mileage (kmpl)",
            Self::Engine => "Engine (CC)",
            Self::MaxPower => "Max Power (bhp)",
            Self::Seats => "Seats",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::CarName => FieldKind::Select {
                placeholder: "Select Car Name",
            },
            Self::SellerType => FieldKind::Select {
                placeholder: "Select Seller Type",
            },
            Self::FuelType => FieldKind::Select {
                placeholder: "Select Fuel Type",
            },
            Self::TransmissionType => FieldKind::Select {
                placeholder: "Select Transmission",
            },
            _ => FieldKind::Number,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self.kind(), FieldKind::Select { .. })
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a wire key is not one of the known fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Whether a character may be typed into a number field
pub fn is_numeric_input(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}
