/// The two dropdowns on the estimator page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dropdown {
    Suburb,
    Type,
}

impl Dropdown {
    pub fn as_str(self) -> &'static str {
        match self {
            Dropdown::Suburb => "suburb",
            Dropdown::Type => "type",
        }
    }
}

/// Describes one lookup list: where it comes from and how it is rendered
///
/// Both dropdowns share a single loader; only these parameters differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSpec {
    pub dropdown: Dropdown,
    /// Path below the API base URL, without a leading slash
    pub endpoint: String,
    /// Key holding the list when the backend wraps it in an object
    pub field: String,
    /// Option appended after the backend values
    pub sentinel: String,
    /// Human readable name used in alerts
    pub label: String,
}

impl LookupSpec {
    pub fn suburbs(sentinel: impl Into<String>) -> Self {
        Self {
            dropdown: Dropdown::Suburb,
            endpoint: "suburbs".to_string(),
            field: "suburbs".to_string(),
            sentinel: sentinel.into(),
            label: "suburbs".to_string(),
        }
    }

    pub fn types(sentinel: impl Into<String>) -> Self {
        Self {
            dropdown: Dropdown::Type,
            endpoint: "types".to_string(),
            field: "types".to_string(),
            sentinel: sentinel.into(),
            label: "property types".to_string(),
        }
    }
}

/// Named inputs of the prediction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Rooms,
    Bedroom,
    Bathroom,
    Carpark,
    Landsize,
    BuildingArea,
    Suburb,
    Type,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Rooms,
        FormField::Bedroom,
        FormField::Bathroom,
        FormField::Carpark,
        FormField::Landsize,
        FormField::BuildingArea,
        FormField::Suburb,
        FormField::Type,
    ];

    /// Input name as it appears in the page markup
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Rooms => "numRooms",
            FormField::Bedroom => "numBedooms",
            FormField::Bathroom => "numBathooms",
            FormField::Carpark => "numCarparks",
            FormField::Landsize => "landarea",
            FormField::BuildingArea => "building area",
            FormField::Suburb => "suburb",
            FormField::Type => "type",
        }
    }

    /// Look a field up by its input name
    pub fn from_input_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.input_name() == name)
    }
}
