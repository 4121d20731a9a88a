//! Command model.
//!
//! The structured description of a single custom command. Field names
//! serialize in camelCase so a command round-trips through the JSON format
//! used by saved command lists.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maximum number of parameters a single parameter list may hold.
pub const MAX_PARAMETERS: usize = 8;

/// Kind of value a parameter accepts.
///
/// Tags outside the known set are preserved verbatim in [`ParamType::Other`]
/// so that they survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ParamType {
    BlockType,
    Boolean,
    EntitySelector,
    EntityType,
    Enum,
    Float,
    Integer,
    ItemType,
    Location,
    PlayerSelector,
    #[default]
    String,
    Other(String),
}

impl ParamType {
    /// All known parameter kinds, in display order.
    pub const KNOWN: [ParamType; 11] = [
        ParamType::BlockType,
        ParamType::Boolean,
        ParamType::EntitySelector,
        ParamType::EntityType,
        ParamType::Enum,
        ParamType::Float,
        ParamType::Integer,
        ParamType::ItemType,
        ParamType::Location,
        ParamType::PlayerSelector,
        ParamType::String,
    ];

    /// The tag used in `CustomCommandParamType.<tag>`.
    pub fn tag(&self) -> &str {
        match self {
            ParamType::BlockType => "BlockType",
            ParamType::Boolean => "Boolean",
            ParamType::EntitySelector => "EntitySelector",
            ParamType::EntityType => "EntityType",
            ParamType::Enum => "Enum",
            ParamType::Float => "Float",
            ParamType::Integer => "Integer",
            ParamType::ItemType => "ItemType",
            ParamType::Location => "Location",
            ParamType::PlayerSelector => "PlayerSelector",
            ParamType::String => "String",
            ParamType::Other(tag) => tag,
        }
    }

    /// Parse a tag. Unknown tags become [`ParamType::Other`].
    pub fn from_tag(tag: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|known| known.tag() == tag)
            .cloned()
            .unwrap_or_else(|| ParamType::Other(tag.to_string()))
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, ParamType::Enum)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for ParamType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for ParamType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ParamType::from_tag(&tag))
    }
}

/// Access tier required to invoke a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PermissionLevel {
    #[default]
    Any,
    GameDirectors,
    Admin,
    Host,
    Owner,
}

impl PermissionLevel {
    pub const ALL: [PermissionLevel; 5] = [
        PermissionLevel::Any,
        PermissionLevel::GameDirectors,
        PermissionLevel::Admin,
        PermissionLevel::Host,
        PermissionLevel::Owner,
    ];

    /// Numeric level, 0 through 4.
    pub fn level(self) -> u8 {
        match self {
            PermissionLevel::Any => 0,
            PermissionLevel::GameDirectors => 1,
            PermissionLevel::Admin => 2,
            PermissionLevel::Host => 3,
            PermissionLevel::Owner => 4,
        }
    }

    /// Member name on `CommandPermissionLevel`.
    pub fn api_name(self) -> &'static str {
        match self {
            PermissionLevel::Any => "Any",
            PermissionLevel::GameDirectors => "GameDirectors",
            PermissionLevel::Admin => "Admin",
            PermissionLevel::Host => "Host",
            PermissionLevel::Owner => "Owner",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PermissionLevel::Any => "Any (0)",
            PermissionLevel::GameDirectors => "Game Directors (1)",
            PermissionLevel::Admin => "Admin (2)",
            PermissionLevel::Host => "Host (3)",
            PermissionLevel::Owner => "Owner (4)",
        }
    }

    /// Numeric level to tier. Out of range levels are `None`.
    pub fn from_level(level: u64) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| u64::from(p.level()) == level)
    }

    /// Lenient parse: anything unrecognized resolves to [`PermissionLevel::Any`].
    pub fn from_str_loose(s: &str) -> Self {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(Self::from_level)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|p| p.api_name().eq_ignore_ascii_case(s.trim()))
            })
            .unwrap_or_default()
    }
}

impl Serialize for PermissionLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.level().to_string())
    }
}

impl<'de> Deserialize<'de> for PermissionLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => PermissionLevel::from_level(n).unwrap_or_default(),
            Raw::Text(s) => PermissionLevel::from_str_loose(&s),
        })
    }
}

/// One typed argument of a command.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "type", default)]
    pub param_type: ParamType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Only emitted for optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Referenced enum, only meaningful when `param_type` is [`ParamType::Enum`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            ..Default::default()
        }
    }

    /// Enum-typed parameter referencing `enum_name`.
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Enum,
            enum_name: Some(enum_name.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    pub fn default_value(&self) -> Option<&str> {
        non_empty(self.default_value.as_deref())
    }

    /// The enum reference, present only for enum-typed parameters.
    pub fn enum_reference(&self) -> Option<&str> {
        if self.param_type.is_enum() {
            non_empty(self.enum_name.as_deref())
        } else {
            None
        }
    }
}

/// A named, ordered set of values usable as a parameter constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumDefinition {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl EnumDefinition {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Which parameter list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterList {
    Mandatory,
    Optional,
}

impl fmt::Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterList::Mandatory => f.write_str("mandatory"),
            ParameterList::Optional => f.write_str("optional"),
        }
    }
}

/// A registrable custom command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_cheats_required")]
    pub cheats_required: bool,

    #[serde(default)]
    pub permission_level: PermissionLevel,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<EnumDefinition>,

    #[serde(default)]
    pub mandatory_parameters: Vec<Parameter>,

    #[serde(default)]
    pub optional_parameters: Vec<Parameter>,
}

fn default_cheats_required() -> bool {
    true
}

impl Default for Command {
    /// The blank command an editor starts from.
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            cheats_required: true,
            permission_level: PermissionLevel::GameDirectors,
            enums: Vec::new(),
            mandatory_parameters: Vec::new(),
            optional_parameters: Vec::new(),
        }
    }
}

impl Command {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn parameters(&self, list: ParameterList) -> &[Parameter] {
        match list {
            ParameterList::Mandatory => &self.mandatory_parameters,
            ParameterList::Optional => &self.optional_parameters,
        }
    }

    pub(crate) fn parameters_mut(&mut self, list: ParameterList) -> &mut Vec<Parameter> {
        match list {
            ParameterList::Mandatory => &mut self.mandatory_parameters,
            ParameterList::Optional => &mut self.optional_parameters,
        }
    }

    /// Mandatory parameters followed by optional ones, in declaration order.
    pub fn all_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.mandatory_parameters
            .iter()
            .chain(self.optional_parameters.iter())
    }

    pub fn parameter_count(&self) -> usize {
        self.mandatory_parameters.len() + self.optional_parameters.len()
    }

    pub fn find_enum(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums.iter().find(|e| e.name == name)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
