use serde::Serialize;

/// Discriminator for a command invoked from the chat input box
pub const CHAT_INPUT: u8 = 1;
/// Discriminator for a free form string option
pub const STRING: u8 = 3;
/// Discriminator for an integer option
pub const INTEGER: u8 = 4;

/// One slash command, shaped the way Discord expects it on the wire
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub options: Vec<CommandOption>,
}

impl Command {
    /// Build a chat input command with no options yet
    pub fn chat_input(name: &str, description: &str) -> Self {
        Command {
            name: name.to_string(),
            description: description.to_string(),
            kind: CHAT_INPUT,
            options: Vec::new(),
        }
    }

    /// Append an option, preserving the declaration order
    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }
}

/// One parameter of a command
/// `autocomplete` and `choices` are platform-exclusive: never set both
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOption {
    pub name: String,
    pub description: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
}

impl CommandOption {
    fn new(kind: u8, name: &str, description: &str, required: bool) -> Self {
        CommandOption {
            name: name.to_string(),
            description: description.to_string(),
            required,
            kind,
            autocomplete: None,
            choices: None,
        }
    }

    /// A free form string option
    pub fn string(name: &str, description: &str, required: bool) -> Self {
        Self::new(STRING, name, description, required)
    }

    /// An integer option
    pub fn integer(name: &str, description: &str, required: bool) -> Self {
        Self::new(INTEGER, name, description, required)
    }

    /// Let the bot suggest values at invocation time
    pub fn autocomplete(mut self) -> Self {
        self.autocomplete = Some(true);
        self
    }

    /// Restrict the option to a fixed list of values
    pub fn choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices);
        self
    }
}

/// A fixed selectable value offered for an option
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub name: String,
    pub value: ChoiceValue,
}

impl Choice {
    /// A choice carrying an integer value
    pub fn int(name: &str, value: i64) -> Self {
        Choice {
            name: name.to_string(),
            value: ChoiceValue::Int(value),
        }
    }

    /// A choice carrying a string value
    pub fn string(name: &str, value: &str) -> Self {
        Choice {
            name: name.to_string(),
            value: ChoiceValue::Str(value.to_string()),
        }
    }
}

/// The primitive actually sent for a choice
/// Serialized untagged so the wire sees a bare string or number
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    Int(i64),
    Str(String),
}
